// SPDX-License-Identifier: MPL-2.0
//! Notice shown above pages that are still being written.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Element, Length};

pub const MESSAGE: &str = "⚠ Work in progress — this page is currently under construction";

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(Text::new(MESSAGE).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::wip_banner)
        .into()
}

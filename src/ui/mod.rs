/// Presentation layer
///
/// Materializes a `Frame` into iced widgets. Nothing here decides what is
/// shown; it only mirrors the description produced by the render pipeline.

mod cards;
mod try_on;

use iced::widget::{button, column, container, opaque, row, scrollable, stack, text, Column, Row};
use iced::{Element, Length, Theme};

use pocket_wardrobe::render::description::{Content, DetailAction, Frame, ItemDetail, NavTab, OutfitsContent};
use crate::Message;

/// Build the whole window from a fresh frame
pub fn frame<'a>(frame: Frame) -> Element<'a, Message> {
    let view = frame.view;

    let body: Element<'a, Message> = match view.content {
        Content::Wardrobe(content) => cards::wardrobe(content),
        Content::Outfits(OutfitsContent::Empty(notice)) => cards::empty_notice(notice),
        Content::Outfits(OutfitsContent::Cards(outfits)) => cards::outfits(outfits),
        Content::TryOn(content) => try_on::try_on(content),
    };

    let base = column![
        navigation(view.navigation),
        scrollable(container(body).padding(16).width(Length::Fill)).height(Length::Fill),
        container(
            button(text(view.main_button.label).size(16))
                .on_press(Message::MainAction)
                .padding(12)
                .width(Length::Fill)
        )
        .padding(10),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    match frame.detail {
        Some(detail) => stack![base, opaque(detail_modal(detail))].into(),
        None => base.into(),
    }
}

fn navigation<'a>(tabs: Vec<NavTab>) -> Element<'a, Message> {
    let buttons = tabs.into_iter().map(|tab| -> Element<'a, Message> {
        let style: fn(&Theme, button::Status) -> button::Style =
            if tab.active { button::primary } else { button::text };
        button(text(tab.label).size(14))
            .on_press(Message::SelectView(tab.view))
            .style(style)
            .padding([8, 16])
            .into()
    });

    container(Row::with_children(buttons).spacing(10))
        .padding(10)
        .center_x(Length::Fill)
        .into()
}

fn detail_modal<'a>(detail: ItemDetail) -> Element<'a, Message> {
    let id = detail.item.id.clone();

    let actions = detail.actions.into_iter().map(|action| -> Element<'a, Message> {
        let message = match action {
            DetailAction::Edit => Message::EditItem(id.clone()),
            DetailAction::Remove => Message::DeleteItem(id.clone()),
            DetailAction::TryOn => Message::TryOnItem(id.clone()),
        };
        let style: fn(&Theme, button::Status) -> button::Style = match action {
            DetailAction::Edit => button::secondary,
            DetailAction::Remove => button::danger,
            DetailAction::TryOn => button::primary,
        };
        button(text(action.label())).on_press(message).style(style).padding([8, 16]).into()
    });

    let content: Column<'a, Message> = column![
        row![
            iced::widget::horizontal_space(),
            button(text("×").size(24)).on_press(Message::CloseDetail).style(button::text),
        ],
        cards::image_placeholder(detail.item.alt, detail.item.image_url, 200.0),
        text(detail.item.name).size(22),
        text(detail.category_line),
        Row::with_children(actions).spacing(10),
    ]
    .spacing(16)
    .padding(20)
    .align_x(iced::Alignment::Center);

    container(container(content).style(container::rounded_box).max_width(400.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length};
use iced_aw::Wrap;

use pocket_wardrobe::render::description::{CategorySection, EmptyNotice, ItemCard, OutfitCard, WardrobeContent};
use crate::Message;

/// Garment images are opaque locators; show the alt text in a fixed box
pub fn image_placeholder<'a>(alt: String, locator: String, size: f32) -> Element<'a, Message> {
    container(column![text(alt).size(12), text(locator).size(9)].spacing(4))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(container::bordered_box)
        .into()
}

pub fn empty_notice<'a>(notice: EmptyNotice) -> Element<'a, Message> {
    container(text(notice.message).size(16))
        .height(Length::Fixed(200.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(200.0))
        .into()
}

pub fn wardrobe<'a>(content: WardrobeContent) -> Element<'a, Message> {
    let mut sections: Vec<Element<'a, Message>> =
        content.sections.into_iter().map(category_section).collect();

    if let Some(notice) = content.empty {
        sections.push(empty_notice(notice));
    }

    Column::with_children(sections).spacing(20).into()
}

fn category_section<'a>(section: CategorySection) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = section.items.into_iter().map(item_card).collect();

    column![
        text(section.title).size(18),
        Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0),
    ]
    .spacing(10)
    .into()
}

pub fn item_card<'a>(card: ItemCard) -> Element<'a, Message> {
    button(
        column![
            image_placeholder(card.alt, card.image_url, 100.0),
            text(card.name).size(12),
        ]
        .spacing(8),
    )
    .on_press(Message::SelectItem(card.id))
    .style(button::secondary)
    .padding(0)
    .into()
}

pub fn outfits<'a>(cards: Vec<OutfitCard>) -> Element<'a, Message> {
    Column::with_children(cards.into_iter().map(outfit_card))
        .spacing(16)
        .into()
}

fn outfit_card<'a>(card: OutfitCard) -> Element<'a, Message> {
    let tiles = card.collage.into_iter().map(|tile| -> Element<'a, Message> {
        container(text(tile.image_url).size(9))
            .width(Length::Fixed(96.0))
            .height(Length::Fixed(96.0))
            .style(container::bordered_box)
            .into()
    });

    let info = column![
        text(card.title).size(20),
        text(card.description),
        row![
            button(text("Save"))
                .on_press(Message::SaveOutfit(card.id.clone()))
                .style(button::secondary),
            button(text("Try On")).on_press(Message::TryOnOutfit(card.id)),
        ]
        .spacing(10),
    ]
    .spacing(8);

    container(column![Row::with_children(tiles).spacing(4), info].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

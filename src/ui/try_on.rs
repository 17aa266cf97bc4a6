use iced::widget::{button, column, container, text, Row};
use iced::{Alignment, Element, Length};

use super::cards::image_placeholder;
use pocket_wardrobe::host::UploadKind;
use pocket_wardrobe::render::description::{PreviewPanel, TryOnContent, UploadPrompt};
use crate::Message;

pub fn try_on<'a>(content: TryOnContent) -> Element<'a, Message> {
    match content {
        TryOnContent::UploadPrompt(prompt) => upload_prompt(prompt),
        TryOnContent::Preview(panel) => preview(panel),
    }
}

fn upload_prompt<'a>(prompt: UploadPrompt) -> Element<'a, Message> {
    container(
        column![
            text(prompt.title).size(24),
            text(prompt.instructions),
            button(text(prompt.upload_label))
                .on_press(Message::StartUpload(UploadKind::Selfie))
                .padding([8, 16]),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding([32, 16])
    .center_x(Length::Fill)
    .into()
}

fn preview<'a>(panel: PreviewPanel) -> Element<'a, Message> {
    let overlay_line = match panel.overlay {
        Some(layer) => format!("Overlay: {} ({}%)", layer.image_url, layer.opacity_percent),
        None => "No garment selected".to_string(),
    };

    let photo = column![
        image_placeholder("User photo".to_string(), panel.photo_url.to_string(), 300.0),
        text(overlay_line).size(12),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let options = panel.options.into_iter().map(|option| -> Element<'a, Message> {
        button(
            column![
                image_placeholder(option.item.alt, option.item.image_url, 80.0),
                text(option.label).size(12),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        )
        .on_press(Message::ChooseOverlay(option.item.id))
        .style(button::text)
        .into()
    });

    column![
        container(photo).center_x(Length::Fill),
        text(panel.heading).size(18),
        Row::with_children(options).spacing(12),
    ]
    .spacing(16)
    .padding(16)
    .into()
}

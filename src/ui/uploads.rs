/// Admin uploads page
///
/// Drop zone, queue controls, and the per-item progress list. The page
/// only renders queue state; all behavior lives in the simulator.

use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, image, progress_bar, row,
    scrollable, text,
};
use iced::{Alignment, Border, Element, Length, Theme};

use super::MUTED;
use crate::state::upload::{human_size, QueuedFile, UploadStatus};
use crate::{App, Message, Page};

pub fn view(app: &App) -> Element<'_, Message> {
    let header = row![
        column![
            text("Admin Uploads").size(32),
            text("Drag and drop files to upload. The transfer is simulated; nothing leaves this machine.")
                .size(14)
                .color(MUTED),
        ]
        .spacing(6),
        horizontal_space(),
        button(text("Back to portfolio").size(14))
            .style(button::secondary)
            .on_press(Message::ShowPage(Page::Home)),
    ]
    .align_y(Alignment::Center);

    let drop_zone = container(
        column![
            text(if app.drop_hover {
                "Release to add files"
            } else {
                "Drop files here or browse below"
            })
            .size(16),
            text("Images, videos, documents. Multiple files supported.")
                .size(13)
                .color(MUTED),
            row![
                button(text("Browse files").size(14)).on_press(Message::BrowseFiles),
                button(text("Add folder").size(14))
                    .style(button::secondary)
                    .on_press(Message::BrowseFolder),
            ]
            .spacing(10),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(32)
    .style(drop_zone_style(app.drop_hover));

    let controls = row![
        text(format!(
            "Queued: {} · Completed: {}",
            app.queue.len(),
            app.queue.completed_count()
        ))
        .size(14)
        .color(MUTED),
        horizontal_space(),
        button(
            text(if app.queue.auto_start() {
                "Auto-start: On"
            } else {
                "Auto-start: Off"
            })
            .size(14)
        )
        .style(button::secondary)
        .on_press(Message::ToggleAutoStart),
        button(text("Start upload").size(14)).on_press(Message::StartUploads),
        button(text("Clear").size(14))
            .style(button::danger)
            .on_press(Message::ClearUploads),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut items = column![].spacing(12);
    if app.queue.is_empty() {
        items = items.push(text("Nothing queued yet.").size(14).color(MUTED));
    } else {
        for item in app.queue.files() {
            items = items.push(upload_row(app, item));
        }
    }

    let how_it_works = container(
        column![
            text("How it works").size(18),
            text("• Drag and drop or browse to select multiple files").size(13).color(MUTED),
            text("• Progress per file with an auto-start option").size(13).color(MUTED),
            text("• Previews generated for images (temporary, in memory)").size(13).color(MUTED),
            text("• Connect a storage backend to switch to real uploads").size(13).color(MUTED),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box);

    scrollable(
        container(
            column![header, drop_zone, controls, horizontal_rule(1), items, how_it_works]
                .spacing(20)
                .padding(28)
                .max_width(900),
        )
        .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn upload_row<'a>(app: &'a App, item: &'a QueuedFile) -> Element<'a, Message> {
    let thumb: Element<Message> = match app.previews.get(&item.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(48.0))
            .height(Length::Fixed(48.0))
            .into(),
        None => container(text(media_glyph(&item.handle.media_type)).size(20))
            .center_x(Length::Fixed(48.0))
            .center_y(Length::Fixed(48.0))
            .into(),
    };

    let meta_line = format!(
        "{} · {}",
        human_size(item.handle.size_bytes),
        item.handle.media_type
    );
    let status_line = match &item.error {
        // Reserved for a real transport; the simulated driver never errors
        Some(detail) => format!("{} · {}", item.status.label(), detail),
        None => format!("{} · {}%", item.status.label(), item.progress),
    };

    let mut trailing = row![].spacing(8).align_y(Alignment::Center);
    if item.status == UploadStatus::Done && item.preview.is_some() {
        trailing = trailing.push(text("Preview ready").size(13).color(MUTED));
    }
    trailing = trailing.push(
        button(text("Remove").size(13))
            .style(button::text)
            .on_press(Message::RemoveUpload(item.id)),
    );

    container(
        column![
            row![
                thumb,
                column![
                    text(item.handle.name.as_str()).size(15),
                    text(meta_line).size(12).color(MUTED),
                ]
                .spacing(4)
                .width(Length::Fill),
                trailing,
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            progress_bar(0.0..=100.0, f32::from(item.progress)).height(Length::Fixed(8.0)),
            text(status_line).size(12).color(MUTED),
        ]
        .spacing(8),
    )
    .padding(12)
    .style(container::bordered_box)
    .into()
}

fn media_glyph(media_type: &str) -> &'static str {
    if media_type.starts_with("image/") {
        "🖼"
    } else if media_type.starts_with("video/") {
        "🎬"
    } else if media_type.starts_with("audio/") {
        "🎵"
    } else {
        "📄"
    }
}

/// Dashed-border look for the drop target, highlighted while files hover.
fn drop_zone_style(hover: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let mut style = container::rounded_box(theme);
        style.border = Border {
            color: if hover {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            },
            width: if hover { 2.0 } else { 1.0 },
            radius: 8.0.into(),
        };
        style
    }
}

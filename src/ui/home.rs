/// Home page sections
///
/// The whole portfolio renders as one scrollable column: navigation, hero,
/// both galleries, DTP and web design showcases, service offerings, and
/// the service request form. Everything reads from the fixed content
/// tables; the only interactive state is the active filter, the open
/// detail card, and the two forms.

use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use super::{ACCENT, MUTED};
use crate::state::content::{self, DESIGN_CATEGORIES};
use crate::state::data::{
    DesignItem, DtpService, Review, ServiceOffering, VideoSource, WebProject,
};
use crate::state::request::{BUDGET_OPTIONS, SERVICE_OPTIONS};
use crate::state::review::ReviewDraft;
use crate::{App, Message, Page, Section};

/// Navigation entries, in display order
const NAV_ITEMS: [(&str, Section); 7] = [
    ("HOME", Section::Home),
    ("VIDEO EDIT", Section::VideoEdit),
    ("GRAPHIC DESIGN", Section::GraphicDesign),
    ("DTP", Section::Dtp),
    ("WEB DESIGN", Section::WebDesign),
    ("SERVICES", Section::Services),
    ("CONTACT", Section::Contact),
];

/// Id of the home scrollable, shared with the navigation snap task
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("home-scroll")
}

pub fn view(app: &App) -> Element<'_, Message> {
    let sections = column![
        navigation(),
        hero(),
        video_gallery(app),
        design_gallery(app),
        dtp_section(app),
        web_design_section(app),
        services_section(app),
        contact_section(app),
        footer(),
    ]
    .spacing(64)
    .padding(32)
    .max_width(1100);

    scrollable(container(sections).center_x(Length::Fill))
        .id(scroll_id())
        .height(Length::Fill)
        .into()
}

fn navigation() -> Element<'static, Message> {
    let links = NAV_ITEMS.iter().fold(
        row![].spacing(4).align_y(Alignment::Center),
        |links, (label, section)| {
            links.push(
                button(text(*label).size(13))
                    .style(button::text)
                    .on_press(Message::JumpTo(*section)),
            )
        },
    );

    column![
        row![
            text("SUNDAR S").size(26).color(ACCENT),
            horizontal_space(),
            button(text("Get in Touch").size(14)).on_press(Message::JumpTo(Section::Contact)),
            button(text("Admin Uploads").size(14))
                .style(button::secondary)
                .on_press(Message::ShowPage(Page::Uploads)),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        links,
        horizontal_rule(1),
    ]
    .spacing(12)
    .into()
}

fn hero() -> Element<'static, Message> {
    column![
        text("Hello I'm").size(18).color(ACCENT),
        text("SUNDAR S").size(64),
        text("Video Editor · Graphic Designer").size(26),
        text(
            "Welcome to my professional portfolio. I'm Sundar S, with 1+ years of freelancing \
             experience in video editing, graphic design, and web development. I produce \
             high-quality content, stay updated with trends, and collaborate with clients to \
             deliver impactful designs that enhance brand identity and drive success."
        )
        .size(15)
        .color(MUTED),
        text("Ready to bring your vision to life? Let's connect and discuss your project.")
            .size(15)
            .color(MUTED),
        row![
            button(text("View Portfolio").size(15))
                .padding(12)
                .on_press(Message::JumpTo(Section::VideoEdit)),
            button(text("Get in Touch").size(15))
                .padding(12)
                .style(button::secondary)
                .on_press(Message::JumpTo(Section::Contact)),
        ]
        .spacing(16),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn section_header(
    kicker: Option<&'static str>,
    title: &'static str,
    subtitle: &'static str,
) -> Element<'static, Message> {
    let mut header = column![].spacing(8).align_x(Alignment::Center).width(Length::Fill);
    if let Some(kicker) = kicker {
        header = header.push(text(kicker).size(16).color(ACCENT));
    }
    header
        .push(text(title).size(34))
        .push(text(subtitle).size(15).color(MUTED))
        .into()
}

fn review_summary(reviews: &[Review]) -> String {
    match reviews.len() {
        0 => String::from("No reviews yet"),
        1 => String::from("1 review"),
        n => format!("{n} reviews"),
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn video_gallery(app: &App) -> Element<'_, Message> {
    let cards = app.videos.iter().fold(row![].spacing(16), |cards, video| {
        let source_note = match video.source {
            VideoSource::Hosted(_) => "Hosted video",
            VideoSource::LocalSample(_) => "Local sample",
        };
        cards.push(
            container(
                column![
                    text(video.title).size(17),
                    text(source_note).size(12).color(MUTED),
                    text(review_summary(&video.reviews)).size(12).color(MUTED),
                    button(text("Details").size(13))
                        .style(button::secondary)
                        .on_press(Message::SelectVideo(Some(video.id))),
                ]
                .spacing(8),
            )
            .padding(16)
            .width(Length::Fixed(260.0))
            .style(container::rounded_box),
        )
    });

    let mut section = column![
        section_header(
            None,
            "Video Portfolio",
            "Explore my video editing work and see what clients have to say about each project."
        ),
        scrollable(cards)
            .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new())),
    ]
    .spacing(20);

    if let Some(id) = app.selected_video {
        if let Some(video) = app.videos.iter().find(|v| v.id == id) {
            section = section.push(detail_panel(
                video.title,
                video.description,
                &video.reviews,
                &app.review_draft,
                format!("video-{id}"),
                Message::SelectVideo(None),
            ));
        }
    }
    section.into()
}

fn design_gallery(app: &App) -> Element<'_, Message> {
    let chips = DESIGN_CATEGORIES.iter().copied().fold(
        row![].spacing(8),
        |chips, category| {
            let style: fn(&Theme, button::Status) -> button::Style =
                if app.active_category == category {
                    button::primary
                } else {
                    button::secondary
                };
            chips.push(
                button(text(category).size(13))
                    .style(style)
                    .on_press(Message::SetCategory(category)),
            )
        },
    );

    let cards: Vec<Element<Message>> =
        content::filter_designs(&app.designs, app.active_category)
            .into_iter()
            .map(design_card)
            .collect();

    let mut section = column![
        section_header(
            None,
            "Graphic Design",
            "A selection of branding, print, and digital design work."
        ),
        chips,
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(20);

    if let Some(id) = app.selected_design {
        if let Some(design) = app.designs.iter().find(|d| d.id == id) {
            section = section.push(detail_panel(
                design.title,
                design.description,
                &design.reviews,
                &app.review_draft,
                format!("design-{id}"),
                Message::SelectDesign(None),
            ));
        }
    }
    section.into()
}

fn design_card(design: &DesignItem) -> Element<'_, Message> {
    container(
        column![
            text(design.title).size(17),
            container(text(design.category).size(11))
                .padding([2.0, 8.0])
                .style(container::rounded_box),
            text(review_summary(&design.reviews)).size(12).color(MUTED),
            button(text("Details").size(13))
                .style(button::secondary)
                .on_press(Message::SelectDesign(Some(design.id))),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(250.0))
    .style(container::rounded_box)
    .into()
}

/// Detail card with the existing reviews and the review form, shared by
/// both galleries.
fn detail_panel<'a>(
    title: &'a str,
    description: &'a str,
    reviews: &'a [Review],
    draft: &'a ReviewDraft,
    target: String,
    on_close: Message,
) -> Element<'a, Message> {
    let mut review_list = column![].spacing(10);
    if reviews.is_empty() {
        review_list = review_list.push(
            text("No reviews yet. Be the first to share your thoughts!")
                .size(13)
                .color(MUTED),
        );
    } else {
        for review in reviews {
            review_list = review_list.push(
                column![
                    row![
                        text(review.author).size(14),
                        text(stars(review.rating)).size(14).color(ACCENT),
                        text(review.date).size(12).color(MUTED),
                    ]
                    .spacing(10)
                    .align_y(Alignment::Center),
                    text(review.comment).size(14),
                ]
                .spacing(4),
            );
        }
    }

    let rating_picker = (1..=5u8).fold(
        row![text("Your rating:").size(14)].spacing(6).align_y(Alignment::Center),
        |picker, value| {
            let star = if value <= draft.rating { "★" } else { "☆" };
            picker.push(
                button(text(star).size(16).color(ACCENT))
                    .style(button::text)
                    .on_press(Message::ReviewRatingChanged(value)),
            )
        },
    );

    container(
        column![
            row![
                text(title).size(22),
                horizontal_space(),
                button(text("Close").size(13))
                    .style(button::text)
                    .on_press(on_close),
            ]
            .align_y(Alignment::Center),
            text(description).size(14).color(MUTED),
            horizontal_rule(1),
            text("Client Reviews").size(16),
            review_list,
            horizontal_rule(1),
            text("Leave a Review").size(16),
            text_input("Your name", &draft.author)
                .on_input(Message::ReviewAuthorChanged)
                .padding(8),
            rating_picker,
            text_input("Share your thoughts about this work...", &draft.comment)
                .on_input(Message::ReviewCommentChanged)
                .padding(8),
            button(text("Submit Review").size(14)).on_press(Message::SubmitReview(target)),
        ]
        .spacing(12),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}

fn dtp_section(app: &App) -> Element<'_, Message> {
    let cards: Vec<Element<Message>> = app.dtp_services.iter().map(dtp_card).collect();

    column![
        section_header(
            None,
            "DTP Services",
            "Desktop Publishing services for all your print design needs with professional \
             quality and precision."
        ),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(20)
    .into()
}

fn dtp_card(service: &DtpService) -> Element<'_, Message> {
    let features = service.features.iter().fold(
        column![].spacing(4),
        |features, feature| {
            features.push(
                row![text("•").color(ACCENT), text(*feature).size(13).color(MUTED)].spacing(6),
            )
        },
    );

    container(
        column![
            text(service.title).size(17),
            text(service.description).size(13).color(MUTED),
            features,
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(250.0))
    .style(container::rounded_box)
    .into()
}

fn web_design_section(app: &App) -> Element<'_, Message> {
    let cards: Vec<Element<Message>> = app.web_projects.iter().map(web_card).collect();

    column![
        section_header(
            None,
            "Web Design & Development",
            "Custom web solutions that combine stunning design with powerful functionality to \
             drive your business forward."
        ),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(20)
    .into()
}

fn web_card(project: &WebProject) -> Element<'_, Message> {
    let technologies = project.technologies.iter().fold(
        row![].spacing(6),
        |chips, tech| {
            chips.push(
                container(text(*tech).size(11))
                    .padding([2.0, 8.0])
                    .style(container::rounded_box),
            )
        },
    );

    container(
        column![
            text(project.title).size(17),
            container(text(project.category).size(11))
                .padding([2.0, 8.0])
                .style(container::rounded_box),
            text(project.description).size(13).color(MUTED),
            technologies,
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(250.0))
    .style(container::rounded_box)
    .into()
}

fn services_section(app: &App) -> Element<'_, Message> {
    let cards: Vec<Element<Message>> = app.services.iter().map(service_card).collect();

    column![
        section_header(
            Some("What I Offer!"),
            "My Services",
            "Professional creative services tailored to bring your vision to life"
        ),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(20)
    .into()
}

fn service_card(offering: &ServiceOffering) -> Element<'_, Message> {
    let features = offering.features.iter().fold(
        column![].spacing(4),
        |features, feature| {
            features.push(
                row![text("•").color(ACCENT), text(*feature).size(13).color(MUTED)].spacing(6),
            )
        },
    );

    container(
        column![
            text(offering.title).size(18),
            text(offering.description).size(13).color(MUTED),
            features,
            text(offering.link).size(12).color(MUTED),
        ]
        .spacing(10),
    )
    .padding(18)
    .width(Length::Fixed(320.0))
    .style(container::rounded_box)
    .into()
}

fn contact_section(app: &App) -> Element<'_, Message> {
    let form = column![
        row![
            labeled_input(
                "Full Name *",
                "Enter your full name",
                &app.request.name,
                Message::RequestNameChanged
            ),
            labeled_input(
                "Phone Number *",
                "+91 98765 43210",
                &app.request.phone,
                Message::RequestPhoneChanged
            ),
        ]
        .spacing(16),
        labeled_input(
            "Email Address *",
            "your.email@example.com",
            &app.request.email,
            Message::RequestEmailChanged
        ),
        column![
            text("Service Required *").size(14),
            pick_list(
                &SERVICE_OPTIONS[..],
                app.request.service,
                Message::RequestServicePicked
            )
            .placeholder("Select a service")
            .width(Length::Fill),
        ]
        .spacing(6),
        column![
            text("Budget Range (Optional)").size(14),
            pick_list(
                &BUDGET_OPTIONS[..],
                app.request.budget,
                Message::RequestBudgetPicked
            )
            .placeholder("Select your budget range")
            .width(Length::Fill),
        ]
        .spacing(6),
        labeled_input(
            "Project Details *",
            "Describe your project requirements, timeline, and any specific details...",
            &app.request.message,
            Message::RequestMessageChanged
        ),
        button(text("Submit Request").size(15))
            .padding(12)
            .width(Length::Fill)
            .on_press(Message::SubmitRequest),
        text("By submitting this form, you agree to our terms of service and privacy policy.")
            .size(12)
            .color(MUTED),
    ]
    .spacing(14);

    column![
        section_header(
            None,
            "Request a Service",
            "Tell us about your project and we'll get back to you within 24 hours"
        ),
        container(form).padding(24).style(container::rounded_box),
    ]
    .spacing(20)
    .into()
}

fn labeled_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![
        text(label).size(14),
        text_input(placeholder, value).on_input(on_input).padding(10),
    ]
    .spacing(6)
    .width(Length::Fill)
    .into()
}

fn footer() -> Element<'static, Message> {
    column![
        horizontal_rule(1),
        text("© 2024 Sundar S. Video editing, graphic design, and web development.")
            .size(13)
            .color(MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

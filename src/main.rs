use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use iced::widget::image::Handle as ImageHandle;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::widget::{column, container, text};
use iced::{event, window, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod files;
mod state;
mod ui;

use files::inspect;
use files::preview::{self, PreviewImage};
use state::content;
use state::data::{DesignItem, DtpService, ServiceOffering, VideoItem, WebProject};
use state::request::ServiceRequest;
use state::review::{LogReviewSink, ReviewDraft, ReviewSink};
use state::upload::{FileHandle, StartOutcome, UploadEvent, UploadQueue, TICK_INTERVAL};

/// Which page is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Uploads,
}

/// Home page sections reachable from the navigation bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Home,
    VideoEdit,
    GraphicDesign,
    Dtp,
    WebDesign,
    Services,
    Contact,
}

/// Rough scroll fraction per section; iced has no scroll-to-widget yet
fn section_anchor(section: Section) -> f32 {
    match section {
        Section::Home => 0.0,
        Section::VideoEdit => 0.13,
        Section::GraphicDesign => 0.30,
        Section::Dtp => 0.48,
        Section::WebDesign => 0.63,
        Section::Services => 0.78,
        Section::Contact => 0.93,
    }
}

/// Main application state
struct App {
    page: Page,
    /// Status line shown at the bottom of the window
    status: String,
    // Home page content and interaction state
    videos: Vec<VideoItem>,
    designs: Vec<DesignItem>,
    dtp_services: Vec<DtpService>,
    web_projects: Vec<WebProject>,
    services: Vec<ServiceOffering>,
    selected_video: Option<&'static str>,
    selected_design: Option<&'static str>,
    active_category: &'static str,
    review_draft: ReviewDraft,
    /// Destination for submitted reviews; swap to integrate a backend
    review_sink: Box<dyn ReviewSink>,
    request: ServiceRequest,
    // Uploads page state
    queue: UploadQueue,
    drop_hover: bool,
    /// Decoded thumbnails for completed image items, by queue id
    previews: HashMap<u64, ImageHandle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    // Navigation
    ShowPage(Page),
    JumpTo(Section),
    // Galleries
    SelectVideo(Option<&'static str>),
    SelectDesign(Option<&'static str>),
    SetCategory(&'static str),
    // Review form
    ReviewAuthorChanged(String),
    ReviewRatingChanged(u8),
    ReviewCommentChanged(String),
    SubmitReview(String),
    // Service request form
    RequestNameChanged(String),
    RequestPhoneChanged(String),
    RequestEmailChanged(String),
    RequestServicePicked(&'static str),
    RequestBudgetPicked(&'static str),
    RequestMessageChanged(String),
    SubmitRequest,
    // Uploads page
    BrowseFiles,
    BrowseFolder,
    FilesInspected(Vec<FileHandle>),
    ToggleAutoStart,
    StartUploads,
    RemoveUpload(u64),
    ClearUploads,
    UploadTick(Instant),
    PreviewReady(u64, Option<PreviewImage>),
    // Window events
    FileDropped(PathBuf),
    FileHovered,
    FilesHoveredLeft,
}

impl App {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let app = App {
            page: Page::Home,
            status: String::from("Ready."),
            videos: content::videos(),
            designs: content::designs(),
            dtp_services: content::dtp_services(),
            web_projects: content::web_projects(),
            services: content::service_offerings(),
            selected_video: None,
            selected_design: None,
            active_category: "All",
            review_draft: ReviewDraft::default(),
            review_sink: Box::new(LogReviewSink),
            request: ServiceRequest::default(),
            queue: UploadQueue::new(),
            drop_hover: false,
            previews: HashMap::new(),
        };

        println!(
            "🎨 Portfolio studio initialized with {} videos and {} designs",
            app.videos.len(),
            app.designs.len()
        );

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPage(page) => {
                self.page = page;
                self.drop_hover = false;
                Task::none()
            }
            Message::JumpTo(section) => {
                self.page = Page::Home;
                scrollable::snap_to(
                    ui::home::scroll_id(),
                    RelativeOffset {
                        x: 0.0,
                        y: section_anchor(section),
                    },
                )
            }

            Message::SelectVideo(id) => {
                self.selected_video = id;
                self.selected_design = None;
                self.review_draft.reset();
                Task::none()
            }
            Message::SelectDesign(id) => {
                self.selected_design = id;
                self.selected_video = None;
                self.review_draft.reset();
                Task::none()
            }
            Message::SetCategory(category) => {
                self.active_category = category;
                // The open detail card may no longer match the filter
                self.selected_design = None;
                Task::none()
            }

            Message::ReviewAuthorChanged(author) => {
                self.review_draft.author = author;
                Task::none()
            }
            Message::ReviewRatingChanged(rating) => {
                self.review_draft.rating = rating;
                Task::none()
            }
            Message::ReviewCommentChanged(comment) => {
                self.review_draft.comment = comment;
                Task::none()
            }
            Message::SubmitReview(target_id) => {
                if !self.review_draft.is_complete() {
                    self.status =
                        String::from("Add your name and a comment before submitting a review.");
                    return Task::none();
                }
                let record = self.review_draft.to_record(&target_id);
                match self.review_sink.submit(&record) {
                    Ok(()) => {
                        self.status = String::from("Thanks! Your review was recorded locally.");
                        self.review_draft.reset();
                    }
                    Err(e) => self.status = format!("Could not record review: {e}"),
                }
                Task::none()
            }

            Message::RequestNameChanged(name) => {
                self.request.name = name;
                Task::none()
            }
            Message::RequestPhoneChanged(phone) => {
                self.request.phone = phone;
                Task::none()
            }
            Message::RequestEmailChanged(email) => {
                self.request.email = email;
                Task::none()
            }
            Message::RequestServicePicked(service) => {
                self.request.service = Some(service);
                Task::none()
            }
            Message::RequestBudgetPicked(budget) => {
                self.request.budget = Some(budget);
                Task::none()
            }
            Message::RequestMessageChanged(message) => {
                self.request.message = message;
                Task::none()
            }
            Message::SubmitRequest => {
                match self.request.submit() {
                    Ok(()) => {
                        self.status = String::from(
                            "Request received! Connect a storage backend to deliver it by email.",
                        );
                        self.request.reset();
                    }
                    Err(e) => self.status = e.to_string(),
                }
                Task::none()
            }

            Message::BrowseFiles => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select files to upload")
                    .pick_files();
                if let Some(paths) = picked {
                    self.status = format!("Inspecting {} file(s)…", paths.len());
                    return Task::perform(inspect::inspect_paths(paths), Message::FilesInspected);
                }
                Task::none()
            }
            Message::BrowseFolder => {
                let picked = FileDialog::new()
                    .set_title("Select a folder to upload")
                    .pick_folder();
                if let Some(folder) = picked {
                    self.status = format!("Scanning {}…", folder.display());
                    return Task::perform(
                        inspect::inspect_paths(vec![folder]),
                        Message::FilesInspected,
                    );
                }
                Task::none()
            }
            Message::FilesInspected(handles) => {
                if handles.is_empty() {
                    self.status = String::from("No readable files were selected.");
                    return Task::none();
                }
                let count = handles.len();
                let events = self.queue.enqueue(handles, Instant::now());
                let started = events.iter().any(|e| matches!(e, UploadEvent::Started(_)));
                self.status = if started {
                    format!("Added {count} file(s). Starting upload (simulated)…")
                } else {
                    format!("Added {count} file(s) to the queue.")
                };
                Task::none()
            }
            Message::ToggleAutoStart => {
                let enabled = self.queue.toggle_auto_start();
                // Enabling the flag also picks up anything already waiting
                if enabled && self.queue.queued_count() > 0 && !self.queue.is_in_flight() {
                    self.queue.start_all(Instant::now());
                    self.status = String::from("Auto-start: on. Starting queued files…");
                } else if enabled {
                    self.status = String::from("Auto-start: on");
                } else {
                    self.status = String::from("Auto-start: off");
                }
                Task::none()
            }
            Message::StartUploads => {
                match self.queue.start_all(Instant::now()) {
                    StartOutcome::Started => {
                        self.status = String::from(
                            "Starting upload… (simulated; no bytes leave this machine)",
                        );
                    }
                    StartOutcome::AlreadyRunning => {
                        self.status = String::from("An upload is already in progress.");
                    }
                    StartOutcome::NothingQueued => {
                        self.status = String::from("No files queued.");
                    }
                }
                Task::none()
            }
            Message::RemoveUpload(id) => {
                self.queue.remove(id, Instant::now());
                self.previews.remove(&id);
                Task::none()
            }
            Message::ClearUploads => {
                self.queue.clear();
                self.previews.clear();
                self.status = String::from("Cleared the upload queue.");
                Task::none()
            }
            Message::UploadTick(now) => {
                let events = self.queue.tick(now);
                let mut tasks = Vec::new();
                for event in events {
                    if let UploadEvent::Completed(id, preview_ref) = event {
                        let is_image = self
                            .queue
                            .get(id)
                            .is_some_and(|item| item.handle.media_type.starts_with("image/"));
                        if let (true, Some(path)) = (is_image, preview_ref.path) {
                            tasks.push(Task::perform(
                                preview::generate_preview(path),
                                move |decoded| Message::PreviewReady(id, decoded),
                            ));
                        }
                    }
                }
                Task::batch(tasks)
            }
            Message::PreviewReady(id, Some(decoded)) => {
                self.previews.insert(
                    id,
                    ImageHandle::from_rgba(decoded.width, decoded.height, decoded.pixels),
                );
                Task::none()
            }
            Message::PreviewReady(id, None) => {
                eprintln!("⚠️  No preview could be decoded for item {id}");
                Task::none()
            }

            Message::FileDropped(path) => {
                self.drop_hover = false;
                if self.page == Page::Uploads {
                    return Task::perform(
                        inspect::inspect_paths(vec![path]),
                        Message::FilesInspected,
                    );
                }
                Task::none()
            }
            Message::FileHovered => {
                if self.page == Page::Uploads {
                    self.drop_hover = true;
                }
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drop_hover = false;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.page {
            Page::Home => ui::home::view(self),
            Page::Uploads => ui::uploads::view(self),
        };

        column![
            container(page).height(Length::Fill),
            container(text(self.status.as_str()).size(13))
                .width(Length::Fill)
                .padding([6.0, 12.0])
                .style(container::bordered_box),
        ]
        .into()
    }

    /// Window events are always watched for drag-and-drop; the periodic
    /// tick runs only while a simulated transfer is in flight.
    fn subscription(&self) -> Subscription<Message> {
        let window_events = event::listen_with(handle_window_event);
        if self.queue.is_in_flight() {
            Subscription::batch([
                window_events,
                iced::time::every(TICK_INTERVAL).map(Message::UploadTick),
            ])
        } else {
            window_events
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn handle_window_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("Sundar S Portfolio", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .centered()
        .run_with(App::new)
}

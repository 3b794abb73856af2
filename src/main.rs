use iced::widget::{button, column, container, row, scrollable, slider, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Application modules
mod constants;
mod loader;
mod state;
mod ui;

use loader::LoadedPhoto;
use state::photo::{Photo, PhotoId};
use state::project::Project;

/// Main application state
struct ScrapbookEditor {
    /// The photo collection and its derived page layout
    project: Project,
    /// Photo currently selected for editing, if any
    selected: Option<PhotoId>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Add Photos" button
    AddPhotos,
    /// User clicked the "Add Folder" button
    AddFolder,
    /// Background photo load completed
    PhotosLoaded(Vec<LoadedPhoto>),
    /// User removed one photo from the selection
    RemovePhoto(PhotoId),
    /// User cleared the whole selection
    ClearPhotos,
    /// User tapped a photo on a page or in the thumbnail grid
    PhotoSelected(PhotoId),
    /// A drag handle or the zoom slider produced a new scale
    ScaleEdited(PhotoId, f32),
    /// The move handle produced a new offset
    OffsetEdited(PhotoId, f32, f32),
    /// Brightness slider moved
    BrightnessEdited(PhotoId, f32),
    /// Contrast slider moved
    ContrastEdited(PhotoId, f32),
    /// User reset the selected photo's edits
    ResetEdits(PhotoId),
}

impl ScrapbookEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            ScrapbookEditor {
                project: Project::new(),
                selected: None,
                status: String::from("Ready. Add photos to start a layout."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddPhotos => {
                // Show the native multi-select file picker
                let files = FileDialog::new()
                    .set_title("Select Photos")
                    .add_filter("Images", &loader::IMAGE_EXTENSIONS)
                    .pick_files();

                match files {
                    Some(paths) if !paths.is_empty() => {
                        self.status = format!("Loading {} photos...", paths.len());
                        Task::perform(loader::load_batch(paths), Message::PhotosLoaded)
                    }
                    // Cancel means "no new photos", not an error
                    _ => Task::none(),
                }
            }

            Message::AddFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Folder with Photos")
                    .pick_folder();

                let Some(folder) = folder else {
                    return Task::none();
                };

                let paths = scan_folder(&folder);
                if paths.is_empty() {
                    self.status = format!("No images found in {}", folder.display());
                    return Task::none();
                }

                println!("🔍 Found {} images in {}", paths.len(), folder.display());
                self.status = format!("Loading {} photos...", paths.len());
                Task::perform(loader::load_batch(paths), Message::PhotosLoaded)
            }

            Message::PhotosLoaded(batch) => {
                let failed = batch.iter().filter(|l| l.is_failed()).count();
                let added = batch.len();
                let photos: Vec<Photo> = batch.into_iter().map(Photo::new).collect();
                self.project.add_photos(photos);

                println!(
                    "📥 Added {} photos, layout now has {} pages",
                    added,
                    self.project.page_count()
                );

                self.status = if failed > 0 {
                    format!(
                        "Added {} photos ({} failed to load). {} pages.",
                        added,
                        failed,
                        self.project.page_count()
                    )
                } else {
                    format!("Added {} photos. {} pages.", added, self.project.page_count())
                };

                Task::none()
            }

            Message::RemovePhoto(id) => {
                if self.selected == Some(id) {
                    self.selected = None;
                }
                if self.project.remove_photo(id) {
                    self.status = format!(
                        "{} photos, {} pages.",
                        self.project.photo_count(),
                        self.project.page_count()
                    );
                }
                Task::none()
            }

            Message::ClearPhotos => {
                self.selected = None;
                self.project.clear();
                self.status = String::from("Cleared all photos.");
                Task::none()
            }

            Message::PhotoSelected(id) => {
                self.selected = Some(id);
                if let Some(photo) = self.project.photo(id) {
                    self.status = format!("Editing {}.", photo.file_name());
                }
                Task::none()
            }

            Message::ScaleEdited(id, scale) => {
                self.project.set_scale(id, scale);
                Task::none()
            }

            Message::OffsetEdited(id, x, y) => {
                self.project.set_offset(id, x, y);
                Task::none()
            }

            Message::BrightnessEdited(id, brightness) => {
                self.project.set_brightness(id, brightness);
                Task::none()
            }

            Message::ContrastEdited(id, contrast) => {
                self.project.set_contrast(id, contrast);
                Task::none()
            }

            Message::ResetEdits(id) => {
                self.project.reset_edits(id);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Photo Scrapbook").size(32),
            text("Automate your weekly photo layout").size(14),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let body = row![
            container(self.selection_panel()).width(Length::Fixed(340.0)),
            container(self.layout_panel()).width(Length::Fill),
        ]
        .spacing(20);

        let content = column![header, body, text(&self.status).size(13)]
            .spacing(16)
            .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Left panel: selection management plus the edit controls for the
    /// currently selected photo
    fn selection_panel(&self) -> Element<Message> {
        let actions = row![
            button("Add Photos").on_press(Message::AddPhotos).padding(8),
            button("Add Folder").on_press(Message::AddFolder).padding(8),
        ]
        .spacing(8);

        let mut panel: Column<Message> = column![
            text("Selected Photos").size(18),
            actions,
        ]
        .spacing(12);

        if self.project.is_empty() {
            panel = panel.push(
                container(text("No photos selected yet").size(14))
                    .width(Length::Fill)
                    .padding(24),
            );
        } else {
            let thumbs: Vec<Element<Message>> = self
                .project
                .photos()
                .iter()
                .map(|photo| self.thumbnail(photo))
                .collect();

            let grid = iced_aw::Wrap::with_elements(thumbs)
                .spacing(8.0)
                .line_spacing(8.0);

            panel = panel
                .push(scrollable(grid).height(Length::Fixed(300.0)))
                .push(
                    row![
                        text(format!("{} photos selected", self.project.photo_count()))
                            .size(12),
                        button("Clear All").on_press(Message::ClearPhotos).padding(6),
                    ]
                    .spacing(12)
                    .align_y(Alignment::Center),
                );
        }

        if let Some(photo) = self.selected.and_then(|id| self.project.photo(id)) {
            panel = panel.push(edit_panel(photo));
        }

        panel.into()
    }

    /// Center panel: the scrollable page layout preview
    fn layout_panel(&self) -> Element<Message> {
        let mut panel: Column<Message> =
            column![text("Page Layout Preview").size(18)].spacing(12);

        if self.selected.is_some() {
            panel = panel.push(
                text("Drag corners to resize • drag the center to move").size(12),
            );
        }

        if self.project.is_empty() {
            panel = panel.push(
                container(text("No photos to layout").size(14))
                    .width(Length::Fill)
                    .padding(24),
            );
            return panel.into();
        }

        let pages: Vec<Element<Message>> = self
            .project
            .pages()
            .iter()
            .map(|page| ui::page::view(page, &self.project, self.selected))
            .collect();

        let page_column = Column::with_children(pages)
            .spacing(20)
            .padding(constants::PAGE_MARGIN)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        panel.push(scrollable(page_column).height(Length::Fill)).into()
    }

    /// One selectable thumbnail with its remove button
    fn thumbnail(&self, photo: &Photo) -> Element<Message> {
        let preview: Element<Message> = match photo.display_handle() {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fixed(80.0))
                .height(Length::Fixed(80.0))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => container(text("!").size(24))
                .center(Length::Fixed(80.0))
                .into(),
        };

        column![
            button(preview)
                .padding(0)
                .on_press(Message::PhotoSelected(photo.id())),
            button(text("Remove").size(11))
                .on_press(Message::RemovePhoto(photo.id()))
                .padding(4),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Edit controls for the selected photo
fn edit_panel(photo: &Photo) -> Element<Message> {
    let id = photo.id();
    let edit = &photo.edit;

    let mut panel: Column<Message> = column![
        text("Edit Photo").size(16),
        text(photo.file_name()).size(12),
    ]
    .spacing(10);

    if photo.is_failed() {
        return panel
            .push(text("This photo could not be loaded.").size(12))
            .into();
    }

    let (width, height) = photo.intrinsic_size();
    let orientation = if photo.needs_rotation() {
        " • rotated to fit"
    } else {
        ""
    };
    panel = panel.push(text(format!("{width} × {height}{orientation}")).size(11));

    panel = panel
        .push(slider_row(
            "Zoom",
            constants::MIN_SCALE..=constants::MAX_SCALE,
            edit.scale,
            format!("{:.1}x", edit.scale),
            move |v| Message::ScaleEdited(id, v),
        ))
        .push(slider_row(
            "Brightness",
            -1.0..=1.0,
            edit.brightness,
            format!("{:.1}", edit.brightness),
            move |v| Message::BrightnessEdited(id, v),
        ))
        .push(slider_row(
            "Contrast",
            0.5..=2.0,
            edit.contrast,
            format!("{:.1}", edit.contrast),
            move |v| Message::ContrastEdited(id, v),
        ))
        .push(button("Reset").on_press(Message::ResetEdits(id)).padding(6));

    panel.into()
}

fn slider_row<'a>(
    label: &'a str,
    range: std::ops::RangeInclusive<f32>,
    value: f32,
    display: String,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(12).width(Length::Fixed(70.0)),
        slider(range, value, on_change).step(0.1),
        text(display).size(12).width(Length::Fixed(40.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Collect every image file under a folder, in a stable order
fn scan_folder(folder: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && loader::is_image_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    // Directory walks make no order promise; selection order should
    paths.sort();
    paths
}

fn main() -> iced::Result {
    iced::application(
        "Photo Scrapbook",
        ScrapbookEditor::update,
        ScrapbookEditor::view,
    )
    .theme(ScrapbookEditor::theme)
    .window_size((1200.0, 800.0))
    .centered()
    .run_with(ScrapbookEditor::new)
}

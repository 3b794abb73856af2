/// Interactive page canvas
///
/// One canvas per scrapbook page. Drawing and hit-testing both work in
/// slot-local coordinates (the geometry in `state::transform`); this module
/// translates between those and the canvas bounds, draws the clipped photos
/// with their current transforms, and turns mouse events into edit
/// messages. The drag snapshot lives in the canvas widget state, so each
/// page owns its gestures and nothing here touches application state
/// directly — all writes travel through messages to `update`.

use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::widget::{column, text, Canvas};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

use crate::constants::{
    MOVE_HANDLE_RADIUS, PAGE_HEIGHT, PAGE_WIDTH, SCALE_HANDLE_RADIUS, SLOT_GAP, SLOT_HEIGHT,
    SLOT_WIDTH,
};
use crate::state::page::Page;
use crate::state::photo::{Photo, PhotoId};
use crate::state::project::Project;
use crate::state::transform::{self, DragState, HandleHit, HandlePosition};
use crate::Message;

const PAGE_BORDER: Color = Color::from_rgb(0.63, 0.63, 0.63);
const SELECTION_BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
const MOVE_GREEN: Color = Color::from_rgb(0.2, 0.78, 0.35);
const PLACEHOLDER_GRAY: Color = Color::from_rgb(0.85, 0.85, 0.85);

/// Build the captioned view for one page
pub fn view<'a>(
    page: &Page,
    project: &'a Project,
    selected: Option<PhotoId>,
) -> Element<'a, Message> {
    let canvas = Canvas::new(PageCanvas::new(page, project, selected))
        .width(Length::Fixed(PAGE_WIDTH))
        .height(Length::Fixed(PAGE_HEIGHT));

    column![
        text(format!("Page {}", page.number())).size(14),
        canvas,
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center)
    .into()
}

/// Canvas program rendering one page and its drag handles
pub struct PageCanvas<'a> {
    /// Photos on this page, resolved from ids in slot order
    photos: Vec<&'a Photo>,
    selected: Option<PhotoId>,
}

impl<'a> PageCanvas<'a> {
    pub fn new(page: &Page, project: &'a Project, selected: Option<PhotoId>) -> Self {
        let photos = page
            .photos()
            .iter()
            .filter_map(|&id| project.photo(id))
            .collect();

        Self { photos, selected }
    }

    fn slot_size(&self) -> Size {
        Size::new(SLOT_WIDTH, SLOT_HEIGHT)
    }

    /// Top-left corner of a slot in canvas coordinates
    fn slot_origin(&self, slot: usize) -> Vector {
        Vector::new(0.0, slot as f32 * (SLOT_HEIGHT + SLOT_GAP))
    }

    fn is_selected(&self, photo: &Photo) -> bool {
        self.selected == Some(photo.id())
    }

    /// The selected photo on this page with its slot index, if any
    fn selected_slot(&self) -> Option<(usize, &'a Photo)> {
        self.photos
            .iter()
            .enumerate()
            .find(|(_, p)| self.is_selected(p))
            .map(|(i, p)| (i, *p))
    }
}

/// Drag currently in progress on a page canvas
#[derive(Debug, Clone, Copy)]
pub struct ActiveDrag {
    photo: PhotoId,
    slot: usize,
    drag: DragState,
}

/// Widget-local interaction state: at most one active drag per page
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    active: Option<ActiveDrag>,
}

impl<'a> Program<Message> for PageCanvas<'a> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press: grab a handle of the selected photo,
            // otherwise treat it as a selection tap
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(position) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };

                // Handles can stick out past their slot, so test them
                // against the whole canvas before slot containment
                if let Some((slot, photo)) = self.selected_slot() {
                    let local = position - self.slot_origin(slot);
                    let hit = transform::hit_test_handles(
                        local,
                        photo.edit.scale,
                        Vector::new(photo.edit.offset_x, photo.edit.offset_y),
                        self.slot_size(),
                    );

                    if let Some(hit) = hit {
                        let drag = match hit {
                            HandleHit::Move => DragState::Panning {
                                start_offset: Vector::new(
                                    photo.edit.offset_x,
                                    photo.edit.offset_y,
                                ),
                                start_cursor: local,
                            },
                            HandleHit::Scale(handle) => DragState::Scaling {
                                handle,
                                start_scale: photo.edit.scale,
                                start_cursor: local,
                            },
                        };

                        state.active = Some(ActiveDrag {
                            photo: photo.id(),
                            slot,
                            drag,
                        });
                        return (canvas::event::Status::Captured, None);
                    }
                }

                for (slot, photo) in self.photos.iter().enumerate() {
                    let local = position - self.slot_origin(slot);
                    if transform::slot_contains(local, self.slot_size()) {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::PhotoSelected(photo.id())),
                        );
                    }
                }

                (canvas::event::Status::Ignored, None)
            }

            // Mouse move: recompute the dragged value from the snapshot
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let Some(active) = state.active else {
                    return (canvas::event::Status::Ignored, None);
                };
                let Some(position) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };

                let local = position - self.slot_origin(active.slot);
                let message = match active.drag {
                    DragState::Idle => None,
                    DragState::Scaling {
                        start_scale,
                        start_cursor,
                        ..
                    } => {
                        let scale = transform::scale_for_drag(
                            start_scale,
                            start_cursor,
                            local,
                            self.slot_size(),
                        );
                        Some(Message::ScaleEdited(active.photo, scale))
                    }
                    DragState::Panning {
                        start_offset,
                        start_cursor,
                    } => {
                        let offset = transform::offset_for_drag(start_offset, start_cursor, local);
                        Some(Message::OffsetEdited(active.photo, offset.x, offset.y))
                    }
                };

                (canvas::event::Status::Captured, message)
            }

            // Mouse release: the drag always finalizes; the last committed
            // value stays, the snapshot is dropped
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.active.take().is_some() {
                    return (canvas::event::Status::Captured, None);
                }
                (canvas::event::Status::Ignored, None)
            }

            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Page background and border
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);
        frame.stroke(
            &canvas::Path::rectangle(Point::ORIGIN, bounds.size()),
            canvas::Stroke::default().with_width(2.0).with_color(PAGE_BORDER),
        );

        for (slot, photo) in self.photos.iter().enumerate() {
            self.draw_photo(&mut frame, slot, photo);
        }

        // Overlays go on top of both slots so oversized selections are
        // never hidden by the neighboring photo
        if let Some((slot, photo)) = self.selected_slot() {
            self.draw_selection(&mut frame, slot, photo);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.active.is_some() {
            return mouse::Interaction::Grabbing;
        }

        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };

        if let Some((slot, photo)) = self.selected_slot() {
            let local = position - self.slot_origin(slot);
            let hit = transform::hit_test_handles(
                local,
                photo.edit.scale,
                Vector::new(photo.edit.offset_x, photo.edit.offset_y),
                self.slot_size(),
            );
            if hit.is_some() {
                return mouse::Interaction::Grab;
            }
        }

        for slot in 0..self.photos.len() {
            if transform::slot_contains(position - self.slot_origin(slot), self.slot_size()) {
                return mouse::Interaction::Pointer;
            }
        }

        mouse::Interaction::default()
    }
}

impl<'a> PageCanvas<'a> {
    /// Draw one photo clipped to its slot
    fn draw_photo(&self, frame: &mut canvas::Frame, slot: usize, photo: &Photo) {
        let origin = self.slot_origin(slot);
        let slot_rect = Rectangle::new(Point::ORIGIN + origin, self.slot_size());

        match photo.display_handle() {
            Some(handle) => {
                let image = canvas::Image::new(handle.clone());
                let target = transform::scaled_rect(
                    photo.edit.scale,
                    Vector::new(photo.edit.offset_x, photo.edit.offset_y),
                    self.slot_size(),
                );

                // Inside with_clip, coordinates are slot-local
                frame.with_clip(slot_rect, |frame| {
                    frame.draw_image(target, image);
                });
            }
            None => {
                // Failed decode: placeholder instead of pixels
                frame.fill_rectangle(slot_rect.position(), slot_rect.size(), PLACEHOLDER_GRAY);
                frame.fill_text(canvas::Text {
                    content: format!("Could not load {}", photo.file_name()),
                    position: Point::new(
                        slot_rect.x + slot_rect.width / 2.0,
                        slot_rect.y + slot_rect.height / 2.0,
                    ),
                    color: Color::from_rgb(0.4, 0.4, 0.4),
                    size: iced::Pixels(14.0),
                    horizontal_alignment: iced::alignment::Horizontal::Center,
                    vertical_alignment: iced::alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        }
    }

    /// Draw the selection border, overflow ghost, and handles for the
    /// selected photo
    fn draw_selection(&self, frame: &mut canvas::Frame, slot: usize, photo: &Photo) {
        let origin = self.slot_origin(slot);
        let slot_rect = Rectangle::new(Point::ORIGIN + origin, self.slot_size());
        let offset = Vector::new(photo.edit.offset_x, photo.edit.offset_y);

        frame.stroke(
            &canvas::Path::rectangle(slot_rect.position(), slot_rect.size()),
            canvas::Stroke::default()
                .with_width(3.0)
                .with_color(SELECTION_BLUE),
        );

        // Ghost of the cropped-away extent: the same transformed image,
        // unclipped and faded, purely informational
        if !photo.edit.is_identity_transform() {
            if let Some(handle) = photo.display_handle() {
                let target =
                    transform::scaled_rect(photo.edit.scale, offset, self.slot_size());
                let ghost = Rectangle::new(target.position() + origin, target.size());
                frame.draw_image(ghost, canvas::Image::new(handle.clone()).opacity(0.3));
            }
        }

        for handle in HandlePosition::ALL {
            let anchor =
                transform::handle_anchor(handle, photo.edit.scale, offset, self.slot_size());
            draw_handle(frame, anchor + origin, SCALE_HANDLE_RADIUS, SELECTION_BLUE);
        }

        let center = transform::move_anchor(self.slot_size());
        draw_handle(frame, center + origin, MOVE_HANDLE_RADIUS, MOVE_GREEN);
    }
}

fn draw_handle(frame: &mut canvas::Frame, center: Point, radius: f32, fill: Color) {
    let circle = canvas::Path::circle(center, radius);
    frame.fill(&circle, fill);
    frame.stroke(
        &circle,
        canvas::Stroke::default().with_width(2.0).with_color(Color::WHITE),
    );
}

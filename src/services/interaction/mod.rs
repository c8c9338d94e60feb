//! Pointer interaction on the timetable.
//!
//! A [`Timetable`] owns the committed items, the selection and the pointer
//! operation in flight. Pointer input arrives as [`PointerEvent`]s already
//! converted to grid indices; every event moves the session through
//! `Idle -> Creating | Moving | Resizing -> Idle`.
//!
//! With [`Timetable::with_create_approval`], a finished creation is held
//! back until the owner calls [`Timetable::confirm_create`] (or
//! [`Timetable::confirm_create_as`] with an edited item) or
//! [`Timetable::reject_create`]. Presses are ignored while it waits.

use crate::models::error::GridError;
use crate::models::grid_index::{add, subtract, GridBounds, GridIndex};
use crate::models::interval::Interval;
use crate::models::layout::DayLayout;
use crate::models::settings::{GridSettings, ResizeBoundary};
use crate::services::schedule::ScheduleService;

/// Source of ids for newly created items.
pub trait IdProvider {
    fn next_id(&mut self) -> String;
}

impl<F> IdProvider for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Hands out `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("item")
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Press on empty grid space
    PressTable { at: GridIndex },
    /// Press on the body of an item
    PressItem { id: String, at: GridIndex },
    /// Press on the bottom resize edge of an item
    PressItemBottomEdge { id: String, at: GridIndex },
    /// Pointer moved while pressed
    Drag { at: GridIndex },
    Release,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Creating {
        id: String,
        initial: GridIndex,
        current: GridIndex,
        start: GridIndex,
        end: GridIndex,
    },
    Moving {
        initial: GridIndex,
        current: GridIndex,
        before: Interval,
        after: Option<Interval>,
    },
    Resizing {
        initial: GridIndex,
        current: GridIndex,
        before: Interval,
        after: Option<Interval>,
    },
}

/// Cursor the renderer should show for the current interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Move,
    RowResize,
}

/// Committed result of a finished interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(Interval),
    /// A finished creation is waiting for approval
    CreateRequested(Interval),
    Moved(Interval),
    Resized(Interval),
    /// A click on empty space cleared the selection
    Cleared,
    Deleted(Vec<Interval>),
}

pub struct Timetable<P: IdProvider = SequentialIds> {
    bounds: GridBounds,
    resize_boundary: ResizeBoundary,
    schedule: ScheduleService,
    items: Vec<Interval>,
    selected: Vec<String>,
    interaction: Interaction,
    ids: P,
    approve_creates: bool,
    pending_create: Option<Interval>,
}

impl Timetable<SequentialIds> {
    pub fn new(settings: &GridSettings, items: Vec<Interval>) -> Result<Self, GridError> {
        Self::with_id_provider(settings, items, SequentialIds::default())
    }
}

impl<P: IdProvider> Timetable<P> {
    pub fn with_id_provider(
        settings: &GridSettings,
        items: Vec<Interval>,
        ids: P,
    ) -> Result<Self, GridError> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self {
            bounds: settings.bounds()?,
            resize_boundary: settings.resize_boundary,
            schedule: ScheduleService::from_settings(settings)?,
            items,
            selected: Vec::new(),
            interaction: Interaction::Idle,
            ids,
            approve_creates: false,
            pending_create: None,
        })
    }

    /// Hold finished creations until they are confirmed or rejected.
    pub fn with_create_approval(mut self) -> Self {
        self.approve_creates = true;
        self
    }

    pub fn items(&self) -> &[Interval] {
        &self.items
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The created item awaiting approval, if any.
    pub fn pending_create(&self) -> Option<&Interval> {
        self.pending_create.as_ref()
    }

    pub fn cursor(&self) -> Option<CursorHint> {
        match &self.interaction {
            Interaction::Creating { start, end, .. } if start != end => Some(CursorHint::Move),
            Interaction::Moving { after: Some(_), .. } => Some(CursorHint::Move),
            Interaction::Resizing { after: Some(_), .. } => Some(CursorHint::RowResize),
            _ => None,
        }
    }

    /// The in-flight item the renderer draws as the dragging overlay. A
    /// creation awaiting approval stays on screen here.
    pub fn preview(&self) -> Option<Interval> {
        if let Some(pending) = &self.pending_create {
            return Some(pending.clone());
        }
        match &self.interaction {
            Interaction::Creating { id, start, end, .. } if start != end => Some(Interval {
                id: id.clone(),
                start: *start,
                end: *end,
            }),
            Interaction::Moving { after, .. } | Interaction::Resizing { after, .. } => after.clone(),
            _ => None,
        }
    }

    /// Lay out the committed items.
    pub fn layout(&self) -> Result<Vec<DayLayout>, GridError> {
        self.schedule.layout_days(&self.items)
    }

    /// Lay out the preview on its own, as an overlay above [`layout`](Self::layout).
    pub fn preview_layout(&self) -> Result<Vec<DayLayout>, GridError> {
        let preview: Vec<Interval> = self.preview().into_iter().collect();
        self.schedule.layout_days(&preview)
    }

    /// Feed one pointer event. Returns a change when an interaction commits.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Change> {
        let is_press = !matches!(event, PointerEvent::Drag { .. } | PointerEvent::Release);
        if is_press && self.pending_create.is_some() {
            log::debug!("Ignoring {:?} while a creation awaits approval", event);
            return None;
        }
        match event {
            PointerEvent::PressTable { at } => {
                self.press_table(at);
                None
            }
            PointerEvent::PressItem { id, at } => {
                self.press_item(&id, at);
                None
            }
            PointerEvent::PressItemBottomEdge { id, at } => {
                self.press_item_bottom_edge(&id, at);
                None
            }
            PointerEvent::Drag { at } => {
                self.drag(at);
                None
            }
            PointerEvent::Release => self.release(),
        }
    }

    /// Commit the creation awaiting approval as it was drawn.
    pub fn confirm_create(&mut self) -> Option<Change> {
        let item = self.pending_create.take()?;
        Some(self.commit_created(item))
    }

    /// Commit `item` in place of the creation awaiting approval, for an
    /// approver that edits what it accepts.
    pub fn confirm_create_as(&mut self, item: Interval) -> Result<Option<Change>, GridError> {
        if self.pending_create.is_none() {
            return Ok(None);
        }
        item.validate()?;
        self.pending_create = None;
        Ok(Some(self.commit_created(item)))
    }

    /// Drop the creation awaiting approval and clear the selection.
    pub fn reject_create(&mut self) -> Option<Change> {
        let item = self.pending_create.take()?;
        log::debug!("Creation of '{}' rejected", item.id);
        self.selected.clear();
        Some(Change::Cleared)
    }

    /// Remove every selected item.
    pub fn delete_selected(&mut self) -> Option<Change> {
        if self.selected.is_empty() || self.pending_create.is_some() {
            return None;
        }
        let selected = std::mem::take(&mut self.selected);
        let (removed, kept): (Vec<Interval>, Vec<Interval>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| selected.contains(&item.id));
        self.items = kept;

        log::debug!("Deleted {} selected items", removed.len());
        if removed.is_empty() {
            None
        } else {
            Some(Change::Deleted(removed))
        }
    }

    fn press_table(&mut self, at: GridIndex) {
        if self.interaction != Interaction::Idle {
            log::debug!("Ignoring table press during {:?}", self.interaction);
            return;
        }
        let id = self.ids.next_id();
        log::debug!("Creating '{}' at {}", id, at);
        self.interaction = Interaction::Creating {
            id,
            initial: at,
            current: at,
            start: at,
            end: at,
        };
    }

    fn press_item(&mut self, id: &str, at: GridIndex) {
        if matches!(
            self.interaction,
            Interaction::Creating { .. } | Interaction::Resizing { .. }
        ) {
            log::debug!("Ignoring item press on '{}' during another operation", id);
            return;
        }
        let Some(item) = self.find(id) else {
            log::warn!("Press on unknown item '{}'", id);
            return;
        };
        self.interaction = Interaction::Moving {
            initial: at,
            current: at,
            before: item,
            after: None,
        };
        self.selected = vec![id.to_string()];
    }

    fn press_item_bottom_edge(&mut self, id: &str, at: GridIndex) {
        if matches!(
            self.interaction,
            Interaction::Creating { .. } | Interaction::Moving { .. }
        ) {
            log::debug!("Ignoring resize press on '{}' during another operation", id);
            return;
        }
        let Some(item) = self.find(id) else {
            log::warn!("Resize press on unknown item '{}'", id);
            return;
        };
        self.interaction = Interaction::Resizing {
            initial: at,
            current: at,
            after: Some(item.clone()),
            before: item,
        };
    }

    fn drag(&mut self, at: GridIndex) {
        let bounds = self.bounds;
        let resize_boundary = self.resize_boundary;

        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Creating {
                initial,
                current,
                start,
                end,
                ..
            } => {
                if *current == at {
                    return;
                }
                *current = at;
                (*start, *end) = if at < *initial {
                    (at, *initial)
                } else {
                    (*initial, at)
                };
            }
            Interaction::Moving {
                initial,
                current,
                before,
                after,
            } => {
                if *current == at {
                    return;
                }
                *current = at;
                let delta = subtract(at, *initial, &bounds);
                *after = Some(Interval {
                    id: before.id.clone(),
                    start: add(before.start, delta, &bounds),
                    end: add(before.end, delta, &bounds),
                });
            }
            Interaction::Resizing {
                current,
                before,
                after,
                ..
            } => {
                if *current == at {
                    return;
                }
                *current = at;
                let collapse = match resize_boundary {
                    ResizeBoundary::Exclusive => at < before.start,
                    ResizeBoundary::Inclusive => at <= before.start,
                };
                let end = if collapse {
                    add(before.start, GridIndex::slots(1), &bounds)
                } else {
                    at
                };
                *after = Some(Interval {
                    id: before.id.clone(),
                    start: before.start,
                    end,
                });
            }
        }
    }

    fn release(&mut self) -> Option<Change> {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => None,
            Interaction::Creating { id, start, end, .. } => {
                if start == end {
                    self.selected.clear();
                    return Some(Change::Cleared);
                }
                let item = Interval { id, start, end };
                if self.approve_creates {
                    log::debug!(
                        "Awaiting approval for '{}' {}..{}",
                        item.id,
                        item.start,
                        item.end
                    );
                    self.selected = vec![item.id.clone()];
                    self.pending_create = Some(item.clone());
                    return Some(Change::CreateRequested(item));
                }
                Some(self.commit_created(item))
            }
            Interaction::Moving { after, .. } => after.map(|item| {
                self.replace(item.clone());
                Change::Moved(item)
            }),
            Interaction::Resizing { after, .. } => after.map(|item| {
                self.replace(item.clone());
                Change::Resized(item)
            }),
        }
    }

    fn commit_created(&mut self, item: Interval) -> Change {
        log::debug!("Created '{}' {}..{}", item.id, item.start, item.end);
        self.selected = vec![item.id.clone()];
        self.items.push(item.clone());
        Change::Created(item)
    }

    fn find(&self, id: &str) -> Option<Interval> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Swap in the new version of an item, moving it to the end of the list
    /// so it draws above the others.
    fn replace(&mut self, item: Interval) {
        if let Some(position) = self.items.iter().position(|existing| existing.id == item.id) {
            self.items.remove(position);
        }
        log::debug!("Committed '{}' {}..{}", item.id, item.start, item.end);
        self.selected = vec![item.id.clone()];
        self.items.push(item);
    }
}

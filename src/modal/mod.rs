use crate::directory::Directory;
use crate::surface::{DetailCard, PagerControls, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerDirection {
    Prev,
    Next,
}

// at most one detail view is open at a time; `order` is the rendered card
// sequence captured when the view was opened, not recomputed on paging
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    Closed,
    Open {
        id: String,
        position: usize,
        order: Vec<String>,
    },
}

#[derive(Clone, Debug)]
pub struct Modal {
    state: DetailState,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        Self {
            state: DetailState::Closed,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open { .. })
    }

    /// Id of the person currently displayed, if a detail view is open.
    pub fn open_id(&self) -> Option<&str> {
        match &self.state {
            DetailState::Open { id, .. } => Some(id.as_str()),
            DetailState::Closed => None,
        }
    }

    fn controls(position: usize, len: usize) -> PagerControls {
        PagerControls {
            prev_enabled: position > 0,
            next_enabled: position + 1 < len,
        }
    }

    /// Opens the detail view for `id`, capturing its position within the
    /// rendered card sequence. A lookup miss in either the directory or the
    /// rendered sequence is reported and leaves the view untouched.
    pub fn open(
        &mut self,
        id: &str,
        rendered: &[String],
        directory: &Directory,
        surface: &mut dyn Surface,
    ) {
        let Some(record) = directory.find_by_id(id) else {
            surface.report(&format!("no person with id '{id}'"));
            return;
        };
        let Some(position) = rendered.iter().position(|r| r == id) else {
            surface.report(&format!("person '{id}' is not in the current gallery"));
            return;
        };

        surface.render_detail(
            &DetailCard::from_record(record),
            Self::controls(position, rendered.len()),
        );
        self.state = DetailState::Open {
            id: id.to_string(),
            position,
            order: rendered.to_vec(),
        };
    }

    /// Steps the open detail view one position forward or backward over the
    /// captured card order. At a boundary the control is disabled and the
    /// click is a self-loop: no transition, view unchanged. Returns whether
    /// a transition occurred.
    pub fn paginate(
        &mut self,
        direction: PagerDirection,
        directory: &Directory,
        surface: &mut dyn Surface,
    ) -> bool {
        let DetailState::Open {
            position, order, ..
        } = &self.state
        else {
            return false;
        };
        let (position, order) = (*position, order.clone());

        let target = match direction {
            PagerDirection::Prev => {
                if position == 0 {
                    return false;
                }
                position - 1
            }
            PagerDirection::Next => {
                if position + 1 >= order.len() {
                    return false;
                }
                position + 1
            }
        };

        let target_id = order[target].clone();
        let Some(record) = directory.find_by_id(&target_id) else {
            surface.report(&format!("no person with id '{target_id}'"));
            return false;
        };

        // replacement is a single render call, so one click can never leave
        // two detail views present
        surface.render_detail(
            &DetailCard::from_record(record),
            Self::controls(target, order.len()),
        );
        self.state = DetailState::Open {
            id: target_id,
            position: target,
            order,
        };
        true
    }

    /// Removes the detail view. Idempotent: closing an already-closed view
    /// is a no-op, and no last-viewed state is retained.
    pub fn close(&mut self, surface: &mut dyn Surface) {
        surface.remove_detail();
        self.state = DetailState::Closed;
    }
}

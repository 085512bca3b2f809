use crate::directory::PersonRecord;
use crate::surface::{CardView, Surface};

// the gallery owns the currently rendered id sequence, which the detail
// view captures at open time for pagination
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    rendered: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replace: clears the prior cards and renders one card per
    /// record, in input order.
    pub fn render(&mut self, records: &[&PersonRecord], surface: &mut dyn Surface) {
        let cards: Vec<CardView> = records.iter().map(|r| CardView::from_record(r)).collect();
        self.rendered = records.iter().map(|r| r.id.clone()).collect();
        surface.render_gallery(&cards);
    }

    /// Ids of the cards currently on screen, in display order.
    pub fn rendered_ids(&self) -> &[String] {
        &self.rendered
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Id at a gallery position, if in range.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.rendered.get(index).map(|s| s.as_str())
    }
}

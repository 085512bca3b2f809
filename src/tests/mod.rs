use crate::directory::{Directory, PersonRecord};
use crate::router::{Command, Flow, OpenTarget, Router};
use crate::surface::{CardView, DetailCard, PagerControls, Surface};

// records what the page currently shows, standing in for the DOM
#[derive(Default)]
struct FakeSurface {
    gallery: Vec<CardView>,
    gallery_renders: usize,
    detail: Option<(DetailCard, PagerControls)>,
    detail_renders: usize,
    reports: Vec<String>,
    notes: Vec<String>,
}

impl FakeSurface {
    fn gallery_ids(&self) -> Vec<&str> {
        self.gallery.iter().map(|c| c.id.as_str()).collect()
    }

    fn detail_nodes(&self) -> usize {
        usize::from(self.detail.is_some())
    }
}

impl Surface for FakeSurface {
    fn render_gallery(&mut self, cards: &[CardView]) {
        self.gallery = cards.to_vec();
        self.gallery_renders += 1;
    }

    fn render_detail(&mut self, detail: &DetailCard, pager: PagerControls) {
        // replaces any existing node; there is never more than one
        self.detail = Some((detail.clone(), pager));
        self.detail_renders += 1;
    }

    fn remove_detail(&mut self) {
        self.detail = None;
    }

    fn report(&mut self, message: &str) {
        self.reports.push(message.to_string());
    }

    fn note(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }
}

fn record(id: &str, first: &str, last: &str) -> PersonRecord {
    PersonRecord {
        id: id.to_string(),
        first: first.to_string(),
        last: last.to_string(),
        email: format!("{first}.{last}@example.com").to_lowercase(),
        phone: "(555) 555-0100".to_string(),
        street_number: "123".to_string(),
        street_name: "Main Street".to_string(),
        city: "Portland".to_string(),
        state: "Oregon".to_string(),
        postcode: "97201".to_string(),
        portrait_url: format!("https://example.com/{id}.jpg"),
        birthdate: "04/17/1985".to_string(),
    }
}

// twelve people, matching the default fetch size
fn twelve_person_directory() -> Directory {
    let names = [
        ("p00", "Mette", "Olsen"),
        ("p01", "Oliver", "Smith"),
        ("p02", "Camille", "Roux"),
        ("p03", "Dennis", "Ward"),
        ("p04", "Freja", "Nielsen"),
        ("p05", "Louis", "Bernard"),
        ("p06", "Grace", "Hughes"),
        ("p07", "Anton", "Jensen"),
        ("p08", "Chloe", "Moreau"),
        ("p09", "Ryan", "Porter"),
        ("p10", "Emma", "Carter"),
        ("p11", "Noah", "Brooks"),
    ];
    Directory::new(names.iter().map(|(id, f, l)| record(id, f, l)).collect()).unwrap()
}

fn fresh_page() -> (Router, FakeSurface) {
    let mut router = Router::new(twelve_person_directory());
    let mut surface = FakeSurface::default();
    router.render_initial(&mut surface);
    (router, surface)
}

#[test]
fn initial_render_shows_every_fetched_person_in_order() {
    let (_, surface) = fresh_page();
    assert_eq!(surface.gallery.len(), 12);
    assert_eq!(surface.gallery[0].id, "p00");
    assert_eq!(surface.gallery[11].id, "p11");
}

#[test]
fn search_results_are_a_subset_whose_names_contain_the_query() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Search("en".to_string()), &mut surface);

    assert!(!surface.gallery.is_empty());
    assert!(surface.gallery.len() < 12);
    for card in surface.gallery.iter() {
        assert!(card.name.to_lowercase().contains("en"));
        assert!(router.directory().find_by_id(&card.id).is_some());
    }
}

#[test]
fn empty_query_restores_the_full_set() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Search("mette".to_string()), &mut surface);
    assert_eq!(surface.gallery.len(), 1);

    router.dispatch(Command::Search(String::new()), &mut surface);
    assert_eq!(surface.gallery.len(), 12);
}

#[test]
fn no_match_search_keeps_the_previous_cards() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Search("olsen".to_string()), &mut surface);
    let before = surface.gallery_ids().join(",");
    let renders_before = surface.gallery_renders;

    router.dispatch(Command::Search("zzzzzz".to_string()), &mut surface);
    assert_eq!(surface.gallery_ids().join(","), before);
    assert_eq!(surface.gallery_renders, renders_before);
    assert!(!surface.notes.is_empty());
}

#[test]
fn open_then_close_leaves_zero_detail_nodes() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Open(OpenTarget::Id("p04".to_string())), &mut surface);
    assert_eq!(surface.detail_nodes(), 1);
    assert_eq!(router.modal().open_id(), Some("p04"));

    router.dispatch(Command::Close, &mut surface);
    assert_eq!(surface.detail_nodes(), 0);
    assert!(!router.modal().is_open());

    // re-dispatching close must stay a no-op
    router.dispatch(Command::Close, &mut surface);
    assert_eq!(surface.detail_nodes(), 0);
}

#[test]
fn pager_boundaries_disable_and_noop_over_twelve_cards() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Open(OpenTarget::Position(1)), &mut surface);

    let (_, pager) = surface.detail.clone().unwrap();
    assert!(!pager.prev_enabled);
    router.dispatch(Command::Prev, &mut surface);
    assert_eq!(router.modal().open_id(), Some("p00"));

    for _ in 0..11 {
        router.dispatch(Command::Next, &mut surface);
    }
    assert_eq!(router.modal().open_id(), Some("p11"));
    let (_, pager) = surface.detail.clone().unwrap();
    assert!(!pager.next_enabled);

    let renders = surface.detail_renders;
    router.dispatch(Command::Next, &mut surface);
    assert_eq!(router.modal().open_id(), Some("p11"));
    assert_eq!(surface.detail_renders, renders);
}

#[test]
fn pager_sequence_lands_on_the_identifier_captured_at_open_time() {
    let (mut router, mut surface) = fresh_page();
    let expected = surface.gallery[4].id.clone();

    router.dispatch(Command::Open(OpenTarget::Position(6)), &mut surface);
    router.dispatch(Command::Next, &mut surface);
    let (_, pager) = surface.detail.clone().unwrap();
    assert!(pager.prev_enabled && pager.next_enabled);

    router.dispatch(Command::Prev, &mut surface);
    router.dispatch(Command::Prev, &mut surface);
    assert_eq!(router.modal().open_id(), Some(expected.as_str()));
}

#[test]
fn pagination_walks_the_filtered_order_not_the_full_store() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Search("en".to_string()), &mut surface);
    let first = surface.gallery[0].id.clone();
    let second = surface.gallery[1].id.clone();

    router.dispatch(Command::Open(OpenTarget::Id(first.clone())), &mut surface);
    router.dispatch(Command::Next, &mut surface);
    assert_eq!(router.modal().open_id(), Some(second.as_str()));

    // a later re-render must not disturb the captured order
    router.dispatch(Command::Search(String::new()), &mut surface);
    router.dispatch(Command::Prev, &mut surface);
    assert_eq!(router.modal().open_id(), Some(first.as_str()));
}

#[test]
fn unknown_identifier_is_reported_without_touching_the_page() {
    let (mut router, mut surface) = fresh_page();
    let gallery_before = surface.gallery_ids().join(",");

    router.dispatch(Command::Open(OpenTarget::Id("ghost".to_string())), &mut surface);
    assert_eq!(surface.detail_nodes(), 0);
    assert_eq!(surface.gallery_ids().join(","), gallery_before);
    assert_eq!(surface.reports.len(), 1);
    assert!(!router.modal().is_open());
}

#[test]
fn out_of_range_position_is_reported() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Open(OpenTarget::Position(13)), &mut surface);
    assert_eq!(surface.detail_nodes(), 0);
    assert_eq!(surface.reports.len(), 1);
}

#[test]
fn quit_ends_the_session_other_commands_continue() {
    let (mut router, mut surface) = fresh_page();
    assert_eq!(
        router.dispatch(Command::List, &mut surface),
        Flow::Continue
    );
    assert_eq!(router.dispatch(Command::Help, &mut surface), Flow::Continue);
    assert_eq!(router.dispatch(Command::Quit, &mut surface), Flow::Quit);
}

#[test]
fn relist_reprints_the_current_subset() {
    let (mut router, mut surface) = fresh_page();
    router.dispatch(Command::Search("olsen".to_string()), &mut surface);
    let before = surface.gallery_ids().join(",");

    router.dispatch(Command::List, &mut surface);
    assert_eq!(surface.gallery_ids().join(","), before);
}

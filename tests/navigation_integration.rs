//! Click navigation over flattened taxonomies, end to end.

use challenge_sunburst::{
    ClickOutcome, DetailPanel, FlatHierarchy, Flattener, FocusState, NavigationState, NodeId,
    PlaceholderRows, RecordingRenderer, SunburstConfig, SunburstView, Taxonomy,
};
use pretty_assertions::assert_eq;

/// R > A > B > C, plus a sibling branch R > D > E > F.
fn chain() -> FlatHierarchy {
    let taxonomy = Taxonomy::from_yaml("R:\n  A:\n    B: [C]\n  D:\n    E: [F]\n").unwrap();
    Flattener::default().flatten(&taxonomy).unwrap()
}

fn id_of(flat: &FlatHierarchy, label: &str) -> NodeId {
    flat.find_by_label(label).unwrap().id.clone()
}

#[test]
fn breadcrumbs_run_from_below_root_to_focus() {
    let flat = chain();
    let details = PlaceholderRows::default();
    let mut state = NavigationState::focused_on_root(flat.index());
    assert!(state.breadcrumbs(flat.index()).is_empty());

    state.handle_click(flat.index(), &id_of(&flat, "A"), &details);
    state.handle_click(flat.index(), &id_of(&flat, "B"), &details);
    assert_eq!(state.breadcrumbs(flat.index()), vec!["A", "B"]);
}

#[test]
fn clicking_focused_node_toggles_up() {
    let flat = chain();
    let index = flat.index();
    let details = PlaceholderRows::default();
    let (root, a, b) = (id_of(&flat, "R"), id_of(&flat, "A"), id_of(&flat, "B"));
    let mut state = NavigationState::focused_on_root(index);

    // depth 1: focus, then back to root
    state.handle_click(index, &a, &details);
    assert_eq!(state.focus_id(), Some(&a));
    let outcome = state.handle_click(index, &a, &details);
    assert_eq!(outcome, ClickOutcome::Collapsed { from: a.clone(), to: root.clone() });
    assert_eq!(state.focus_id(), Some(&root));

    // depth 2: focus, then back to its parent
    state.handle_click(index, &b, &details);
    state.handle_click(index, &b, &details);
    assert_eq!(state.focus_id(), Some(&a));
}

#[test]
fn leaf_click_opens_panel_without_moving_focus() {
    let flat = chain();
    let index = flat.index();
    let details = PlaceholderRows::default();
    let b = id_of(&flat, "B");
    let c = id_of(&flat, "C");
    let mut state = NavigationState::focused_on_root(index);
    state.handle_click(index, &b, &details);

    let outcome = state.handle_click(index, &c, &details);
    assert_eq!(outcome, ClickOutcome::PanelOpened { node: c.clone(), rows: 6 });
    assert_eq!(state.focus(), &FocusState::FocusedAt(b.clone()));
    assert_eq!(state.panel().rows().len(), 6);
    assert!(state.panel().rows().iter().all(|row| row.chars().count() == 80));

    // any non-leaf click closes the panel again
    state.handle_click(index, &id_of(&flat, "E"), &details);
    assert_eq!(state.panel(), &DetailPanel::Closed);
}

#[test]
fn four_level_tree_zooms_through_depth_three() {
    let taxonomy = Taxonomy::from_yaml("R:\n  A:\n    B:\n      C: [s1, s2]\n").unwrap();
    let config = SunburstConfig::from_yaml("depth_levels: 4").unwrap();
    let flat = Flattener::new(config.flatten_options())
        .flatten(&taxonomy)
        .unwrap();
    let index = flat.index();
    let details = PlaceholderRows::default();
    let (b, c, s1) = (id_of(&flat, "B"), id_of(&flat, "C"), id_of(&flat, "s1"));
    let mut state = NavigationState::focused_on_root(index);

    state.handle_click(index, &id_of(&flat, "A"), &details);
    state.handle_click(index, &b, &details);
    let outcome = state.handle_click(index, &c, &details);
    assert_eq!(outcome, ClickOutcome::Refocused { from: Some(b.clone()), to: c.clone() });
    assert_eq!(state.breadcrumbs(index), vec!["A", "B", "C"]);
    assert!(!state.panel().is_open());

    // depth 3 toggles back up like any internal node
    let outcome = state.handle_click(index, &c, &details);
    assert_eq!(outcome, ClickOutcome::Collapsed { from: c.clone(), to: b.clone() });

    // depth 4 is the leaf ring
    state.handle_click(index, &c, &details);
    let outcome = state.handle_click(index, &s1, &details);
    assert_eq!(outcome, ClickOutcome::PanelOpened { node: s1.clone(), rows: 6 });
    assert_eq!(state.focus(), &FocusState::FocusedAt(c.clone()));
    assert_eq!(state.breadcrumbs(index), vec!["A", "B", "C"]);
}

#[test]
fn root_click_resets_focus_and_panel() {
    let flat = chain();
    let index = flat.index();
    let details = PlaceholderRows::default();
    let mut state = NavigationState::focused_on_root(index);
    state.handle_click(index, &id_of(&flat, "E"), &details);
    state.handle_click(index, &id_of(&flat, "F"), &details);
    assert!(state.panel().is_open());

    state.handle_click(index, &id_of(&flat, "R"), &details);
    assert_eq!(state.focus_id(), Some(index.root_id()));
    assert!(!state.panel().is_open());
}

#[test]
fn unknown_id_changes_nothing() {
    let flat = chain();
    let index = flat.index();
    let details = PlaceholderRows::default();
    let mut state = NavigationState::focused_on_root(index);
    state.handle_click(index, &id_of(&flat, "A"), &details);
    state.mark_clean();
    let before = state.clone();

    let outcome = state.handle_click(index, &NodeId::new("node-404"), &details);
    assert!(!outcome.changed_state());
    assert_eq!(state, before);
    assert_eq!(state.snapshot(index), before.snapshot(index));
}

#[test]
fn view_replays_clicks_on_bundled_taxonomy() {
    let flat = Flattener::default()
        .flatten(&Taxonomy::bundled().unwrap())
        .unwrap();
    let debt = id_of(&flat, "Debt Sustainability");
    let rollover = id_of(&flat, "Rollover Risk");
    let statement = id_of(&flat, "Lengthen the average maturity of domestic debt");

    let mut view = SunburstView::with_defaults(flat, RecordingRenderer::new());
    assert!(view.mount());
    for id in [&debt, &rollover, &statement] {
        view.renderer().click(id.clone());
    }
    let outcomes = view.pump();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(view.breadcrumbs(), vec!["Debt Sustainability", "Rollover Risk"]);
    assert!(view.state().panel().is_open());

    let frames = view.renderer().frames();
    let levels: Vec<&str> = frames.iter().map(|f| f.level.as_str()).collect();
    assert_eq!(
        levels,
        vec!["node-0", debt.as_str(), rollover.as_str(), rollover.as_str()]
    );
    assert!(frames.iter().all(|f| f.maxdepth == 2));

    assert!(view.unmount());
    assert_eq!(view.renderer().subscriber_count(), 0);
}

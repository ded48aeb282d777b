//! The route planner page.
//!
//! [`RoutePlanner`] owns two city [`ComboBox`]es ("From" and "To"), a swap
//! button, a [`PrioritySelect`] and a search button, and keeps the selected
//! cities in sync with both controls. Searches go to the route-search
//! endpoint through [`RouteSearchClient`].
//!
//! The host feeds raw input in window coordinates:
//!
//! ```ignore
//! let mut planner = RoutePlanner::new(&PlannerConfig::default())?;
//! planner.layout(900.0);
//!
//! if planner.pointer_press(press) == PlannerAction::SearchRequested {
//!     planner.search().await;
//! }
//! println!("{}", planner.summary());
//! ```

mod cities;

use std::sync::Arc;

use parking_lot::Mutex;
use waypoint_core::logging::targets;
use waypoint_core::{MouseButton, Point, PointerEventHub, PointerPressEvent, Rect};
use waypoint_net::{Priority, RouteQuery, RouteResult, RouteSearchClient};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::widget::widgets::{ComboBox, ComboBoxProps, PrioritySelect};
use crate::widget::{
    Key, KeyPressEvent, KeyboardModifiers, MouseMoveEvent, MousePressEvent, Widget, WidgetEvent,
};

pub use cities::{CITIES, city_options};

/// Height of every control in the search row.
pub const ROW_HEIGHT: f32 = 44.0;
/// Space between controls.
pub const SPACING: f32 = 14.0;
/// Width of the swap button.
pub const SWAP_WIDTH: f32 = 60.0;
/// Width of the priority selector and the search button.
pub const SIDE_WIDTH: f32 = 140.0;
/// Narrowest a city field gets, however small the page.
pub const MIN_FIELD_WIDTH: f32 = 120.0;

/// Progress of the most recent route search.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search has been run.
    #[default]
    Idle,
    /// A search is in flight, between [`RoutePlanner::begin_search`] and
    /// [`RoutePlanner::finish_search`].
    Loading,
    /// The endpoint returned a route.
    Found(RouteResult),
    /// The search failed; the message is meant for the user.
    Failed(String),
}

/// Controls on the page that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    From,
    To,
    Priority,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 3] = [FocusTarget::From, FocusTarget::To, FocusTarget::Priority];

    fn next(self) -> Self {
        match self {
            FocusTarget::From => FocusTarget::To,
            FocusTarget::To => FocusTarget::Priority,
            FocusTarget::Priority => FocusTarget::From,
        }
    }
}

/// What a pointer press asked the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerAction {
    /// Nothing beyond what the page already handled.
    None,
    /// The cities were swapped.
    Swapped,
    /// The search button was pressed with both cities chosen; call
    /// [`RoutePlanner::search`].
    SearchRequested,
}

/// The owner's copy of the user's choices.
#[derive(Debug, Clone, Default)]
struct Selection {
    from: Option<String>,
    to: Option<String>,
    priority: Priority,
}

/// The travel-search page.
#[derive(Debug)]
pub struct RoutePlanner {
    hub: Arc<PointerEventHub>,
    from: ComboBox,
    to: ComboBox,
    priority: PrioritySelect,
    selection: Arc<Mutex<Selection>>,
    focus: Option<FocusTarget>,
    swap_button: Rect,
    search_button: Rect,
    search: SearchState,
    client: RouteSearchClient,
}

impl RoutePlanner {
    /// Create the page on the process-wide pointer hub.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        Self::with_hub(config, PointerEventHub::global().clone())
    }

    /// Create the page on a specific pointer hub.
    pub fn with_hub(config: &PlannerConfig, hub: Arc<PointerEventHub>) -> Result<Self> {
        let client = config.route_client()?;
        Ok(Self::with_client(config, client, hub))
    }

    /// Create the page with an existing route-search client.
    pub fn with_client(
        config: &PlannerConfig,
        client: RouteSearchClient,
        hub: Arc<PointerEventHub>,
    ) -> Self {
        let options = city_options();
        let from = ComboBox::with_hub(
            ComboBoxProps::new("From", options.clone()).with_placeholder(&config.from_placeholder),
            &hub,
        );
        let to = ComboBox::with_hub(
            ComboBoxProps::new("To", options).with_placeholder(&config.to_placeholder),
            &hub,
        );
        let priority = PrioritySelect::new(config.default_priority);

        let selection = Arc::new(Mutex::new(Selection {
            priority: config.default_priority,
            ..Selection::default()
        }));

        let sel = selection.clone();
        from.value_changed.connect(move |city| {
            sel.lock().from = Some(city.clone());
        });
        let sel = selection.clone();
        to.value_changed.connect(move |city| {
            sel.lock().to = Some(city.clone());
        });
        let sel = selection.clone();
        priority.priority_changed.connect(move |p| {
            sel.lock().priority = *p;
        });

        tracing::debug!(target: targets::PLANNER, endpoint = %client.route_url(), "route planner created");

        let mut planner = Self {
            hub,
            from,
            to,
            priority,
            selection,
            focus: None,
            swap_button: Rect::ZERO,
            search_button: Rect::ZERO,
            search: SearchState::Idle,
            client,
        };
        planner.layout(900.0);
        planner
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The origin control.
    pub fn from_box(&self) -> &ComboBox {
        &self.from
    }

    /// The origin control, for direct input.
    pub fn from_box_mut(&mut self) -> &mut ComboBox {
        &mut self.from
    }

    /// The destination control.
    pub fn to_box(&self) -> &ComboBox {
        &self.to
    }

    /// The destination control, for direct input.
    pub fn to_box_mut(&mut self) -> &mut ComboBox {
        &mut self.to
    }

    /// The priority selector.
    pub fn priority_select(&self) -> &PrioritySelect {
        &self.priority
    }

    /// The priority selector, for direct input.
    pub fn priority_select_mut(&mut self) -> &mut PrioritySelect {
        &mut self.priority
    }

    /// The chosen origin.
    pub fn from_city(&self) -> Option<String> {
        self.selection.lock().from.clone()
    }

    /// The chosen destination.
    pub fn to_city(&self) -> Option<String> {
        self.selection.lock().to.clone()
    }

    /// The chosen priority.
    pub fn priority(&self) -> Priority {
        self.selection.lock().priority
    }

    /// The control holding keyboard focus.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// The swap button rectangle.
    pub fn swap_button(&self) -> Rect {
        self.swap_button
    }

    /// The search button rectangle.
    pub fn search_button(&self) -> Rect {
        self.search_button
    }

    /// Progress of the most recent search.
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// The client searches are sent through.
    pub fn client(&self) -> &RouteSearchClient {
        &self.client
    }

    // =========================================================================
    // Page behavior
    // =========================================================================

    /// Lay the search row out across `width`.
    ///
    /// Columns are From, swap, To, priority; the search button sits below
    /// the priority selector. City fields never shrink below
    /// [`MIN_FIELD_WIDTH`], so a narrow page overflows to the right.
    pub fn layout(&mut self, width: f32) {
        let fixed = SWAP_WIDTH + SIDE_WIDTH + 3.0 * SPACING;
        let field = ((width - fixed) / 2.0).max(MIN_FIELD_WIDTH);

        let mut x = 0.0;
        self.from.set_geometry(Rect::new(x, 0.0, field, ROW_HEIGHT));
        x += field + SPACING;
        self.swap_button = Rect::new(x, 0.0, SWAP_WIDTH, ROW_HEIGHT);
        x += SWAP_WIDTH + SPACING;
        self.to.set_geometry(Rect::new(x, 0.0, field, ROW_HEIGHT));
        x += field + SPACING;
        self.priority
            .set_geometry(Rect::new(x, 0.0, SIDE_WIDTH, ROW_HEIGHT));
        self.search_button = Rect::new(x, ROW_HEIGHT + SPACING, SIDE_WIDTH, ROW_HEIGHT);
    }

    /// Exchange origin and destination.
    ///
    /// A control is only resynced when its city actually changed, so text
    /// typed into a control without a chosen city survives a no-op swap.
    pub fn swap(&mut self) {
        let (from, to) = {
            let mut selection = self.selection.lock();
            let selection = &mut *selection;
            std::mem::swap(&mut selection.from, &mut selection.to);
            (selection.from.clone(), selection.to.clone())
        };
        if from == to {
            tracing::trace!(target: targets::PLANNER, "swap left both cities unchanged");
            return;
        }
        self.from.sync_external_value(from.as_deref());
        self.to.sync_external_value(to.as_deref());
        tracing::debug!(target: targets::PLANNER, from = ?from, to = ?to, "cities swapped");
    }

    /// One line describing the current selection.
    pub fn summary(&self) -> String {
        let selection = self.selection.lock();
        match (selection.from.as_deref(), selection.to.as_deref()) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                format!("Route selected: {from} → {to}")
            }
            _ => "Pick your cities to get started.".to_string(),
        }
    }

    /// The query a search would send, if both cities are chosen.
    pub fn search_request(&self) -> Option<RouteQuery> {
        let selection = self.selection.lock();
        let from = selection.from.as_deref().filter(|s| !s.is_empty())?;
        let to = selection.to.as_deref().filter(|s| !s.is_empty())?;
        Some(RouteQuery::new(from, to, selection.priority))
    }

    /// Run a route search for the current selection.
    ///
    /// Without both cities the state is left untouched. Failures are
    /// recorded in [`SearchState::Failed`].
    pub async fn search(&mut self) -> &SearchState {
        let Some(query) = self.begin_search() else {
            return &self.search;
        };
        let result = self.client.find_route(&query).await;
        self.finish_search(result)
    }

    /// Mark a search as started and return the query to send.
    ///
    /// Hosts that run the request on their own task use this with
    /// [`RoutePlanner::client`] and [`RoutePlanner::finish_search`]; the page
    /// shows [`SearchState::Loading`] in between. Returns `None`, leaving the
    /// state untouched, unless both cities are chosen.
    pub fn begin_search(&mut self) -> Option<RouteQuery> {
        let Some(query) = self.search_request() else {
            tracing::debug!(target: targets::PLANNER, "search skipped: cities not chosen");
            return None;
        };

        tracing::debug!(
            target: targets::PLANNER,
            from = %query.from,
            to = %query.to,
            priority = query.priority.token(),
            "searching"
        );
        self.search = SearchState::Loading;
        Some(query)
    }

    /// Record the outcome of a search started with
    /// [`RoutePlanner::begin_search`].
    pub fn finish_search(&mut self, result: waypoint_net::Result<RouteResult>) -> &SearchState {
        self.search = match result {
            Ok(route) => SearchState::Found(route),
            Err(err) => {
                tracing::warn!(target: targets::PLANNER, error = %err, "route search failed");
                SearchState::Failed(err.user_message())
            }
        };
        &self.search
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    /// Move keyboard focus, notifying the newly focused control.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        if self.focus == target {
            return;
        }
        self.focus = target;
        tracing::trace!(target: targets::PLANNER, focus = ?target, "focus changed");
        if let Some(target) = target {
            self.widget_mut(target).event(&WidgetEvent::FocusIn);
        }
    }

    /// Handle a pointer press anywhere on the page.
    ///
    /// The press is broadcast on the pointer hub first, so open dropdowns it
    /// lands outside of close, then routed to the control under it.
    pub fn pointer_press(&mut self, event: PointerPressEvent) -> PlannerAction {
        self.hub.dispatch(event);

        if let Some(target) = self.target_at(event.pos) {
            self.set_focus(Some(target));
            let widget = self.widget_mut(target);
            let local = to_local(widget.geometry(), event.pos);
            widget.event(&WidgetEvent::MousePress(MousePressEvent::new(
                event.button,
                local,
                event.pos,
                KeyboardModifiers::NONE,
            )));
            return PlannerAction::None;
        }

        self.set_focus(None);
        if event.button != MouseButton::Left {
            return PlannerAction::None;
        }

        if self.swap_button.contains(event.pos) {
            self.swap();
            PlannerAction::Swapped
        } else if self.search_button.contains(event.pos) && self.search_request().is_some() {
            PlannerAction::SearchRequested
        } else {
            PlannerAction::None
        }
    }

    /// Handle pointer movement, for dropdown hover.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(target) = self.target_at(pos) else {
            return false;
        };
        let widget = self.widget_mut(target);
        let local = to_local(widget.geometry(), pos);
        widget.event(&WidgetEvent::MouseMove(MouseMoveEvent::new(local, pos)))
    }

    /// Deliver a key press to the focused control.
    ///
    /// Tab moves focus through From, To and the priority selector. Returns
    /// whether the key was consumed.
    pub fn key_press(&mut self, event: &KeyPressEvent) -> bool {
        if event.key == Key::Tab {
            let next = self.focus.map_or(FocusTarget::From, FocusTarget::next);
            self.set_focus(Some(next));
            return true;
        }
        match self.focus {
            Some(target) => self
                .widget_mut(target)
                .event(&WidgetEvent::KeyPress(event.clone())),
            None => false,
        }
    }

    fn widget(&self, target: FocusTarget) -> &dyn Widget {
        match target {
            FocusTarget::From => &self.from,
            FocusTarget::To => &self.to,
            FocusTarget::Priority => &self.priority,
        }
    }

    fn widget_mut(&mut self, target: FocusTarget) -> &mut dyn Widget {
        match target {
            FocusTarget::From => &mut self.from,
            FocusTarget::To => &mut self.to,
            FocusTarget::Priority => &mut self.priority,
        }
    }

    fn target_at(&self, pos: Point) -> Option<FocusTarget> {
        FocusTarget::ORDER
            .into_iter()
            .find(|target| self.widget(*target).hit_region().contains(pos))
    }
}

fn to_local(geometry: Rect, pos: Point) -> Point {
    Point::new(pos.x - geometry.left(), pos.y - geometry.top())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn planner() -> (Arc<PointerEventHub>, RoutePlanner) {
        let hub = PointerEventHub::new();
        let client = RouteSearchClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let planner = RoutePlanner::with_client(&PlannerConfig::default(), client, hub.clone());
        (hub, planner)
    }

    fn pick(combo: &mut ComboBox, query: &str) {
        combo.set_query(query);
        assert!(combo.commit(0), "no match for {query}");
    }

    #[test]
    fn test_initial_summary() {
        let (_hub, planner) = planner();
        assert_eq!(planner.summary(), "Pick your cities to get started.");
        assert_eq!(planner.search_request(), None);
        assert_eq!(planner.priority(), Priority::Time);
        assert_eq!(planner.from_box().placeholder(), "Start typing a city…");
    }

    #[test]
    fn test_commits_flow_into_selection() {
        let (_hub, mut planner) = planner();
        pick(planner.from_box_mut(), "atl");
        pick(planner.to_box_mut(), "den");
        planner.priority_select_mut().set_value(Priority::Cost);

        assert_eq!(
            planner.summary(),
            "Route selected: Atlanta (ATL) → Denver (DEN)"
        );
        assert_eq!(
            planner.search_request(),
            Some(RouteQuery::new("Atlanta (ATL)", "Denver (DEN)", Priority::Cost))
        );
    }

    #[test]
    fn test_swap_updates_controls() {
        let (_hub, mut planner) = planner();
        pick(planner.from_box_mut(), "bos");

        planner.swap();

        assert_eq!(planner.from_city(), None);
        assert_eq!(planner.to_city().as_deref(), Some("Boston (BOS)"));
        assert_eq!(planner.from_box().query(), "");
        assert_eq!(planner.to_box().query(), "Boston (BOS)");
        assert!(!planner.from_box().is_open());
        assert!(!planner.to_box().is_open());
    }

    #[test]
    fn test_swap_without_city_change_keeps_typed_text() {
        let (_hub, mut planner) = planner();
        planner.from_box_mut().set_query("bo");
        planner.from_box_mut().request_close();

        planner.swap();

        assert_eq!(planner.from_box().query(), "bo");
        assert_eq!(planner.to_box().query(), "");
        assert_eq!(planner.from_city(), None);
        assert_eq!(planner.to_city(), None);
    }

    #[test]
    fn test_swap_same_city_keeps_typed_text() {
        let (_hub, mut planner) = planner();
        pick(planner.from_box_mut(), "den");
        pick(planner.to_box_mut(), "den");
        planner.to_box_mut().set_query("Denver (DEN) x");

        planner.swap();

        assert_eq!(planner.from_box().query(), "Denver (DEN)");
        assert_eq!(planner.to_box().query(), "Denver (DEN) x");
    }

    #[test]
    fn test_search_loading_between_begin_and_finish() {
        let (_hub, mut planner) = planner();
        assert_eq!(planner.begin_search(), None);
        assert_eq!(planner.search_state(), &SearchState::Idle);

        pick(planner.from_box_mut(), "aus");
        pick(planner.to_box_mut(), "sea");
        let query = planner.begin_search();

        assert_eq!(
            query,
            Some(RouteQuery::new("Austin (AUS)", "Seattle (SEA)", Priority::Time))
        );
        assert_eq!(planner.search_state(), &SearchState::Loading);

        let state = planner.finish_search(Err(waypoint_net::NetworkError::Timeout));
        assert_eq!(state, &SearchState::Failed("Request timed out".to_string()));
    }

    #[test]
    fn test_narrow_layout_keeps_fields_reachable() {
        let (_hub, mut planner) = planner();
        planner.layout(200.0);

        let from = planner.from_box().geometry();
        let to = planner.to_box().geometry();
        assert_eq!(from.width(), MIN_FIELD_WIDTH);
        assert_eq!(to.width(), MIN_FIELD_WIDTH);

        let press = PointerPressEvent::new(MouseButton::Left, Point::new(to.left() + 5.0, 5.0));
        planner.pointer_press(press);
        assert_eq!(planner.focus(), Some(FocusTarget::To));
        assert!(planner.to_box().is_open());
    }

    #[test]
    fn test_layout_columns() {
        let (_hub, mut planner) = planner();
        planner.layout(900.0);

        let from = planner.from_box().geometry();
        let to = planner.to_box().geometry();
        assert_eq!(from.left(), 0.0);
        assert_eq!(from.width(), to.width());
        assert_eq!(planner.swap_button().left(), from.right() + SPACING);
        assert_eq!(to.left(), planner.swap_button().right() + SPACING);
        assert_eq!(
            planner.search_button().top(),
            ROW_HEIGHT + SPACING
        );
    }

    #[test]
    fn test_press_on_input_focuses_and_opens() {
        let (_hub, mut planner) = planner();
        let press = PointerPressEvent::new(MouseButton::Left, Point::new(10.0, 10.0));

        assert_eq!(planner.pointer_press(press), PlannerAction::None);
        assert_eq!(planner.focus(), Some(FocusTarget::From));
        assert!(planner.from_box().is_open());
    }

    #[test]
    fn test_press_elsewhere_closes_open_dropdown() {
        let (_hub, mut planner) = planner();
        planner.from_box_mut().set_query("a");
        assert!(planner.from_box().is_open());

        let to = planner.to_box().geometry();
        let press = PointerPressEvent::new(MouseButton::Left, Point::new(to.left() + 5.0, 5.0));
        planner.pointer_press(press);

        assert!(!planner.from_box().is_open());
        assert_eq!(planner.from_box().query(), "a");
        assert!(planner.to_box().is_open());
        assert_eq!(planner.focus(), Some(FocusTarget::To));
    }

    #[test]
    fn test_press_on_dropdown_row_commits() {
        let (_hub, mut planner) = planner();
        planner.set_focus(Some(FocusTarget::From));
        planner.key_press(&KeyPressEvent::typed("d"));
        let first = planner.from_box().filtered()[0].clone();

        let row = Point::new(10.0, ROW_HEIGHT + 2.0 + 5.0);
        planner.pointer_press(PointerPressEvent::new(MouseButton::Left, row));

        assert_eq!(planner.from_city(), Some(first));
        assert!(!planner.from_box().is_open());
    }

    #[test]
    fn test_swap_button_press() {
        let (_hub, mut planner) = planner();
        pick(planner.to_box_mut(), "sea");
        let center = planner.swap_button();
        let press = PointerPressEvent::new(
            MouseButton::Left,
            Point::new(center.left() + 5.0, center.top() + 5.0),
        );

        assert_eq!(planner.pointer_press(press), PlannerAction::Swapped);
        assert_eq!(planner.from_city().as_deref(), Some("Seattle (SEA)"));
    }

    #[test]
    fn test_search_button_needs_both_cities() {
        let (_hub, mut planner) = planner();
        let button = planner.search_button();
        let press = PointerPressEvent::new(
            MouseButton::Left,
            Point::new(button.left() + 5.0, button.top() + 5.0),
        );

        assert_eq!(planner.pointer_press(press), PlannerAction::None);

        pick(planner.from_box_mut(), "mia");
        pick(planner.to_box_mut(), "sfo");
        assert_eq!(planner.pointer_press(press), PlannerAction::SearchRequested);
    }

    #[test]
    fn test_tab_cycles_focus_and_keys_follow() {
        let (_hub, mut planner) = planner();
        assert!(!planner.key_press(&KeyPressEvent::key(Key::ArrowDown)));

        planner.key_press(&KeyPressEvent::key(Key::Tab));
        assert_eq!(planner.focus(), Some(FocusTarget::From));
        planner.key_press(&KeyPressEvent::key(Key::Tab));
        planner.key_press(&KeyPressEvent::key(Key::Tab));
        assert_eq!(planner.focus(), Some(FocusTarget::Priority));

        assert!(planner.key_press(&KeyPressEvent::key(Key::ArrowDown)));
        assert_eq!(planner.priority(), Priority::Cost);

        planner.key_press(&KeyPressEvent::key(Key::Tab));
        assert_eq!(planner.focus(), Some(FocusTarget::From));
    }

    #[test]
    fn test_dropping_planner_releases_watchers() {
        let (hub, planner) = planner();
        assert_eq!(hub.subscriber_count(), 2);
        drop(planner);
        assert_eq!(hub.subscriber_count(), 0);
    }
}

//! Screen controller.
//!
//! This module implements The Elm Architecture (TEA) pattern for the
//! interests screen: terminal events become [`Intent`]s, intents mutate the
//! [`InterestStore`], and the view re-renders from the store.
//!
//! The controller also owns the one time-based trigger on the screen: the
//! welcome overlay hides itself after a delay unless the user dismisses it
//! first.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::config::{FeatureFlags, Settings};
use crate::events::{Event, KeyContext};
use crate::model::InterestItem;
use crate::store::InterestStore;
use crate::tasks::{ScreenMessage, TaskSpawner, TimerHandle};
use crate::ui::{Focus, NavTab, ScreenView};

/// User intents emitted by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The search text changed to the given value.
    SearchChanged(String),
    /// The search text was cleared.
    ClearSearch,
    /// A category chip was picked; `None` or `"All"` clears the filter.
    CategoryPicked(Option<String>),
    /// A card was tapped, by index into the filtered list.
    ItemTapped(usize),
    /// The add-status badge on a card was tapped, by index into the filtered list.
    StatusTapped(usize),
    /// The add button was tapped.
    AddTapped,
    /// A bottom navigation tab was tapped.
    NavTapped(NavTab),
    /// The welcome overlay was tapped.
    WelcomeTapped,
}

/// Extension points for affordances that carry no behavior of their own.
///
/// Every method has a no-op default that only records a debug event.
pub trait ScreenHooks {
    /// A card was tapped.
    fn on_item_tapped(&mut self, index: usize, item: &InterestItem) {
        debug!(index, title = %item.title, "Interest tapped");
    }

    /// The add-status badge at the end of a card's title was tapped.
    fn on_status_tapped(&mut self, index: usize, item: &InterestItem) {
        debug!(index, title = %item.title, completed = item.completed, "Status tapped");
    }

    /// The add button was tapped.
    fn on_add_tapped(&mut self) {
        debug!("Add tapped");
    }

    /// A bottom navigation tab was tapped.
    fn on_nav_tapped(&mut self, tab: NavTab) {
        debug!(tab = tab.label(), "Navigation tapped");
    }
}

/// Hooks that only log.
#[derive(Debug, Default)]
pub struct LoggingHooks;

impl ScreenHooks for LoggingHooks {}

/// The interests screen controller.
pub struct App {
    store: InterestStore,
    screen: ScreenView,
    features: FeatureFlags,
    welcome_delay: Duration,
    hooks: Box<dyn ScreenHooks>,
    spawner: TaskSpawner,
    messages: mpsc::UnboundedReceiver<ScreenMessage>,
    welcome_timer: Option<TimerHandle>,
    active: bool,
    should_quit: bool,
}

impl App {
    /// Create the controller over `items`.
    pub fn new(items: Vec<InterestItem>, settings: &Settings) -> Self {
        let features = settings.features;
        let mut store = InterestStore::new(items, features.welcome);
        if let Some(chips) = &settings.categories {
            store = store.with_category_chips(chips.clone());
        }

        let mut screen = ScreenView::new(features);
        screen.sync(&store);

        let (spawner, messages) = TaskSpawner::new();

        debug!(
            items = store.items().len(),
            chips = store.category_chips().len(),
            "Creating screen controller"
        );

        Self {
            store,
            screen,
            features,
            welcome_delay: settings.welcome_delay(),
            hooks: Box::new(LoggingHooks),
            spawner,
            messages,
            welcome_timer: None,
            active: false,
            should_quit: false,
        }
    }

    /// Replace the extension hooks.
    pub fn with_hooks(mut self, hooks: impl ScreenHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// The store backing the screen.
    pub fn store(&self) -> &InterestStore {
        &self.store
    }

    /// The screen view.
    pub fn screen(&self) -> &ScreenView {
        &self.screen
    }

    /// Whether the screen is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Activate the screen and schedule the welcome auto-dismiss.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        info!("Screen activated");

        if self.features.welcome && self.store.state().show_welcome() {
            self.welcome_timer = Some(
                self.spawner
                    .spawn_after(self.welcome_delay, ScreenMessage::WelcomeTimerElapsed),
            );
        }
    }

    /// Tear the screen down. Pending timers are cancelled and late messages
    /// are ignored.
    pub fn teardown(&mut self) {
        if let Some(timer) = self.welcome_timer.take() {
            timer.cancel();
        }
        if self.active {
            info!("Screen torn down");
        }
        self.active = false;
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
            }
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key_event(key);
            }
            Event::Click { column, row } => {
                trace!(column, row, "Click event");
                if self.store.state().show_welcome() {
                    self.handle_intent(Intent::WelcomeTapped);
                } else if let Some(intent) = self.screen.handle_click(column, row, &self.store) {
                    self.handle_intent(intent);
                }
            }
            Event::Paste(text) => {
                if !self.store.state().show_welcome() {
                    if let Some(intent) = self.screen.handle_paste(&text, &self.store) {
                        self.handle_intent(intent);
                    }
                }
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // The overlay swallows every key
        if self.store.state().show_welcome() {
            self.handle_intent(Intent::WelcomeTapped);
            return;
        }

        if self.screen.focus() == Focus::List
            && key.code == KeyCode::Char('q')
            && key.modifiers == KeyModifiers::NONE
        {
            self.should_quit = true;
            return;
        }

        if let Some(intent) = self.screen.handle_input(key, &self.store) {
            self.handle_intent(intent);
        } else {
            self.screen.sync(&self.store);
        }
    }

    /// Apply an intent to the store and re-align the view.
    pub fn handle_intent(&mut self, intent: Intent) {
        debug!(?intent, "Handling intent");
        match intent {
            Intent::SearchChanged(query) => self.store.set_search_query(query),
            Intent::ClearSearch => self.store.set_search_query(""),
            Intent::CategoryPicked(category) => self.store.set_selected_category(category),
            Intent::ItemTapped(index) => {
                let view_model = self.store.derive_view_model();
                if let Some(item) = view_model.filtered_items.get(index) {
                    self.hooks.on_item_tapped(index, item);
                }
            }
            Intent::StatusTapped(index) => {
                let view_model = self.store.derive_view_model();
                if let Some(item) = view_model.filtered_items.get(index) {
                    self.hooks.on_status_tapped(index, item);
                }
            }
            Intent::AddTapped => self.hooks.on_add_tapped(),
            Intent::NavTapped(tab) => self.hooks.on_nav_tapped(tab),
            Intent::WelcomeTapped => self.dismiss_welcome(),
        }
        self.screen.sync(&self.store);
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, message: ScreenMessage) {
        if !self.active {
            debug!(?message, "Ignoring message after teardown");
            return;
        }
        match message {
            ScreenMessage::WelcomeTimerElapsed => {
                if self.store.state().show_welcome() {
                    info!("Welcome overlay timed out");
                    self.dismiss_welcome();
                }
            }
        }
    }

    /// Drain pending background messages. Returns true if any arrived.
    pub fn poll_messages(&mut self) -> bool {
        let mut received = false;
        while let Ok(message) = self.messages.try_recv() {
            received = true;
            self.handle_message(message);
        }
        received
    }

    fn dismiss_welcome(&mut self) {
        if let Some(timer) = self.welcome_timer.take() {
            timer.cancel();
        }
        self.store.dismiss_welcome();
    }

    /// Key context for the help bar.
    pub fn key_context(&self) -> KeyContext {
        self.screen.key_context(&self.store)
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.screen.render(frame, area, &self.store);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::seed_interests;

    #[derive(Default)]
    struct RecordingHooks {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl ScreenHooks for RecordingHooks {
        fn on_item_tapped(&mut self, index: usize, item: &InterestItem) {
            self.calls
                .borrow_mut()
                .push(format!("item:{}:{}", index, item.title));
        }

        fn on_status_tapped(&mut self, index: usize, item: &InterestItem) {
            self.calls
                .borrow_mut()
                .push(format!("status:{}:{}", index, item.title));
        }

        fn on_add_tapped(&mut self) {
            self.calls.borrow_mut().push("add".to_string());
        }

        fn on_nav_tapped(&mut self, tab: NavTab) {
            self.calls.borrow_mut().push(format!("nav:{}", tab.label()));
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn app() -> App {
        App::new(seed_interests(), &Settings::default())
    }

    fn app_without_welcome() -> App {
        let mut settings = Settings::default();
        settings.features.welcome = false;
        App::new(seed_interests(), &settings)
    }

    fn titles(app: &App) -> Vec<String> {
        app.store()
            .derive_view_model()
            .filtered_items
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert!(!app.is_active());
        assert!(!app.should_quit());
        assert!(app.store().state().show_welcome());
        assert_eq!(app.key_context(), KeyContext::Welcome);
    }

    #[test]
    fn test_welcome_disabled_starts_hidden() {
        let app = app_without_welcome();
        assert!(!app.store().state().show_welcome());
        assert_eq!(app.key_context(), KeyContext::List);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_on_q_in_list() {
        let mut app = app_without_welcome();
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_types_in_search() {
        let mut app = app_without_welcome();
        app.update(key(KeyCode::Char('/')));
        app.update(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.store().state().search_query(), "q");
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.update(Event::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_key_dismisses_welcome_and_is_consumed() {
        let mut app = app();
        app.update(key(KeyCode::Char('q')));
        assert!(!app.store().state().show_welcome());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_click_dismisses_welcome() {
        let mut app = app();
        app.update(Event::Click { column: 10, row: 10 });
        assert!(!app.store().state().show_welcome());
    }

    #[test]
    fn test_clicks_reach_hooks() {
        let hooks = RecordingHooks::default();
        let calls = Rc::clone(&hooks.calls);
        let mut app = app_without_welcome().with_hooks(hooks);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        // Default layout: header 2, search 3, chips 1, stats 4, then the
        // list border and refresh hint, so the first card starts on row 12
        app.update(Event::Click { column: 10, row: 14 });
        app.update(Event::Click { column: 78, row: 37 });
        assert_eq!(
            *calls.borrow(),
            vec!["item:1:Android Auto".to_string(), "add".to_string()]
        );
        assert_eq!(app.screen().selected(), Some(1));
    }

    #[test]
    fn test_chip_click_filters() {
        let mut app = app_without_welcome();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        // " ✓ All " spans columns 0..7 of row 5, " UI/UX " follows the gap
        app.update(Event::Click { column: 10, row: 5 });
        assert_eq!(app.store().state().selected_category(), Some("UI/UX"));
        assert_eq!(titles(&app), vec!["Accessibilities", "Material Design"]);
    }

    #[test]
    fn test_click_under_overlay_only_dismisses() {
        let hooks = RecordingHooks::default();
        let calls = Rc::clone(&hooks.calls);
        let mut app = app().with_hooks(hooks);
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        app.update(Event::Click { column: 78, row: 37 });
        assert!(!app.store().state().show_welcome());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_status_tap_does_not_change_state() {
        let mut app = app_without_welcome();
        let before = app.store().state().clone();
        app.handle_intent(Intent::StatusTapped(1));
        assert_eq!(app.store().state(), &before);
        assert!(!app.store().items()[1].completed);
    }

    #[test]
    fn test_search_flow() {
        let mut app = app_without_welcome();
        app.update(key(KeyCode::Char('/')));
        type_text(&mut app, "kot");
        assert_eq!(titles(&app), vec!["Kotlin 3"]);

        app.update(key(KeyCode::Esc));
        assert_eq!(app.screen().focus(), Focus::List);
        app.update(key(KeyCode::Esc));
        assert_eq!(app.store().state().search_query(), "");
        assert_eq!(app.store().derive_view_model().filtered_items.len(), 18);
    }

    #[test]
    fn test_search_and_category_intersect() {
        let mut app = app_without_welcome();
        app.handle_intent(Intent::CategoryPicked(Some("Development".to_string())));
        app.handle_intent(Intent::SearchChanged("a".to_string()));
        assert_eq!(
            titles(&app),
            vec!["Android Studio Tools", "Architecture", "Performance"]
        );
    }

    #[test]
    fn test_pick_all_clears_category() {
        let mut app = app_without_welcome();
        app.handle_intent(Intent::CategoryPicked(Some("Development".to_string())));
        app.handle_intent(Intent::CategoryPicked(Some("All".to_string())));
        assert_eq!(app.store().state().selected_category(), None);
    }

    #[test]
    fn test_selection_clamped_after_filter() {
        let mut app = app_without_welcome();
        app.update(key(KeyCode::Char('G')));
        assert_eq!(app.screen().selected(), Some(17));

        app.handle_intent(Intent::SearchChanged("kotlin".to_string()));
        assert_eq!(app.screen().selected(), Some(0));

        app.handle_intent(Intent::SearchChanged("zzz".to_string()));
        assert_eq!(app.screen().selected(), None);
    }

    #[test]
    fn test_hooks_receive_taps() {
        let hooks = RecordingHooks::default();
        let calls = Rc::clone(&hooks.calls);
        let mut app = app_without_welcome().with_hooks(hooks);

        app.update(key(KeyCode::Char('j')));
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Char(' ')));
        app.update(key(KeyCode::Char('a')));
        app.update(key(KeyCode::Char('1')));

        assert_eq!(
            *calls.borrow(),
            vec![
                "item:1:Android Auto".to_string(),
                "status:1:Android Auto".to_string(),
                "add".to_string(),
                "nav:For You".to_string(),
            ]
        );
    }

    #[test]
    fn test_taps_do_not_change_state() {
        let mut app = app_without_welcome();
        let before = app.store().state().clone();
        app.handle_intent(Intent::ItemTapped(0));
        app.handle_intent(Intent::AddTapped);
        app.handle_intent(Intent::NavTapped(NavTab::Shared));
        assert_eq!(app.store().state(), &before);
        assert_eq!(app.store().items().len(), 18);
    }

    #[test]
    fn test_item_tap_out_of_range_is_ignored() {
        let hooks = RecordingHooks::default();
        let calls = Rc::clone(&hooks.calls);
        let mut app = app_without_welcome().with_hooks(hooks);
        app.handle_intent(Intent::ItemTapped(99));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_paste_updates_query() {
        let mut app = app_without_welcome();
        app.update(Event::Paste("Android".to_string()));
        assert_eq!(app.store().state().search_query(), "Android");
        assert_eq!(titles(&app).len(), 3);
    }

    #[test]
    fn test_huge_paste_renders() {
        let mut app = app_without_welcome();
        app.update(Event::Paste("x".repeat(65_534)));
        assert_eq!(app.screen().focus(), Focus::Search);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
    }

    #[test]
    fn test_paste_ignored_under_overlay() {
        let mut app = app();
        app.update(Event::Paste("Android".to_string()));
        assert_eq!(app.store().state().search_query(), "");
    }

    #[test]
    fn test_message_ignored_when_inactive() {
        let mut app = app();
        app.handle_message(ScreenMessage::WelcomeTimerElapsed);
        assert!(app.store().state().show_welcome());
    }

    #[test]
    fn test_view_renders() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_welcome_auto_dismisses() {
        let mut app = app();
        app.activate();

        tokio::time::sleep(Duration::from_millis(2999)).await;
        app.poll_messages();
        assert!(app.store().state().show_welcome());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(app.poll_messages());
        assert!(!app.store().state().show_welcome());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tap_before_timer() {
        let mut app = app();
        app.activate();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        app.update(key(KeyCode::Enter));
        assert!(!app.store().state().show_welcome());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!app.poll_messages());
        assert!(!app.store().state().show_welcome());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_timer() {
        let mut app = app();
        app.activate();
        app.teardown();
        assert!(!app.is_active());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        app.poll_messages();
        assert!(app.store().state().show_welcome());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_welcome_delay() {
        let settings = Settings {
            welcome_delay_ms: 500,
            ..Default::default()
        };
        let mut app = App::new(seed_interests(), &settings);
        app.activate();

        tokio::time::sleep(Duration::from_millis(501)).await;
        app.poll_messages();
        assert!(!app.store().state().show_welcome());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timer_without_welcome() {
        let mut app = app_without_welcome();
        app.activate();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!app.poll_messages());
    }
}

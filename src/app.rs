//! Application state management for the PeakSquare listing browser
//!
//! Holds the loaded datasets, the current view, and the keyboard-driven
//! state transitions. Data loading is async and happens from the main event
//! loop; `handle_key` itself never touches the network, it only records
//! pending navigation and refresh requests for the loop to act on.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::config::FeedConfig;
use crate::data::{find_blog_post, BlogPost, FeedClient, ListingRef, Property};
use crate::render::NavTarget;
use crate::search::{search_listings, SearchHit};

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial skeleton state while the first load is outstanding
    Loading,
    /// Property listing grid
    PropertyList,
    /// Detail view for one property, addressed by navigation identity
    PropertyDetail(ListingRef),
    /// Market insight (blog) list
    BlogList,
    /// Detail view for one blog post, addressed by navigation identity
    BlogDetail(ListingRef),
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Cursor position in the active list view
    pub selected_index: usize,
    /// Loaded property dataset, in server order
    pub properties: Vec<Property>,
    /// Loaded blog dataset, in server order
    pub blog_posts: Vec<BlogPost>,
    /// Single post fetched for the blog detail view, when one was available
    pub open_post: Option<BlogPost>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Whether the search overlay is open
    pub search_active: bool,
    /// Current search input
    pub search_query: String,
    /// Cursor position in the search results
    pub search_selected: usize,
    /// Flag indicating a forced refresh has been requested
    pub refresh_requested: bool,
    /// Navigation recorded by `handle_key` for the event loop to execute
    pub pending_nav: Option<NavTarget>,
    /// Start in the blog list once loading finishes (from --blog)
    pub pending_blog_list: bool,
    /// Timestamp of the last completed load
    pub last_refresh: Option<DateTime<Local>>,
    /// Scroll offset for detail views
    pub detail_scroll_offset: u16,
    /// Feed client for both datasets
    feed: FeedClient,
}

impl App {
    /// Creates a new App with the default feed configuration
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    /// Creates a new App against a specific feed configuration
    pub fn with_config(config: FeedConfig) -> Self {
        Self {
            state: AppState::Loading,
            selected_index: 0,
            properties: Vec::new(),
            blog_posts: Vec::new(),
            open_post: None,
            should_quit: false,
            show_help: false,
            search_active: false,
            search_query: String::new(),
            search_selected: 0,
            refresh_requested: false,
            pending_nav: None,
            pending_blog_list: false,
            last_refresh: None,
            detail_scroll_offset: 0,
            feed: FeedClient::new(config),
        }
    }

    /// Creates a new App from CLI startup configuration
    ///
    /// Applies the endpoint override, the starting view, and the forced
    /// cache clear before the first load.
    pub fn with_startup_config(startup: StartupConfig) -> Self {
        let config = match &startup.api_url {
            Some(url) => FeedConfig::with_api_url(url.clone()),
            None => FeedConfig::default(),
        };

        let mut app = Self::with_config(config);
        app.pending_blog_list = startup.start_in_blog;
        if startup.force_refresh {
            app.feed.clear_cache();
        }
        app
    }

    /// Loads both datasets concurrently and leaves the Loading state
    pub async fn load_all_data(&mut self) {
        let (properties, blog_posts) =
            futures::join!(self.feed.load_properties(), self.feed.load_blog_posts());

        self.properties = properties;
        self.blog_posts = blog_posts;
        self.last_refresh = Some(Local::now());

        if self.state == AppState::Loading {
            self.state = if self.pending_blog_list {
                AppState::BlogList
            } else {
                AppState::PropertyList
            };
            self.pending_blog_list = false;
        }
    }

    /// Forced refresh: clears every cached dataset and reloads
    pub async fn reload(&mut self) {
        self.refresh_requested = false;
        self.feed.clear_cache();
        self.load_all_data().await;
        self.clamp_selection();
    }

    /// Executes a recorded navigation, performing the detail view's own load
    ///
    /// Property details re-load the property dataset (usually a cache hit)
    /// and the view re-looks the record up by its identity. Blog details
    /// additionally try the single-post endpoint for the full article body.
    pub async fn open_detail(&mut self, target: NavTarget) {
        self.detail_scroll_offset = 0;
        self.open_post = None;

        match target {
            NavTarget::Property(listing_ref) => {
                self.properties = self.feed.load_properties().await;
                self.state = AppState::PropertyDetail(listing_ref);
            }
            NavTarget::BlogPost(listing_ref) => {
                if let ListingRef::Id(ref id) = listing_ref {
                    self.open_post = self.feed.fetch_blog_post(id).await;
                }
                if self.open_post.is_none() {
                    // Fall back to the record from the list payload
                    self.open_post = find_blog_post(&self.blog_posts, &listing_ref).cloned();
                }
                self.state = AppState::BlogDetail(listing_ref);
            }
        }
    }

    /// Takes the pending navigation, if any, for the event loop to execute
    pub fn take_pending_nav(&mut self) -> Option<NavTarget> {
        self.pending_nav.take()
    }

    /// Search hits for the current query
    pub fn search_hits(&self) -> Vec<SearchHit> {
        search_listings(&self.search_query, &self.properties, &self.blog_posts)
    }

    /// Number of rows in the active list view
    fn active_list_len(&self) -> usize {
        match self.state {
            AppState::BlogList => self.blog_posts.len(),
            _ => self.properties.len(),
        }
    }

    /// Moves the list cursor up
    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves the list cursor down
    fn move_selection_down(&mut self) {
        let len = self.active_list_len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Keeps the cursor inside the active list after a reload
    fn clamp_selection(&mut self) {
        let len = self.active_list_len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Navigation target for the currently selected list row
    fn selected_target(&self) -> Option<NavTarget> {
        match self.state {
            AppState::PropertyList => {
                if self.selected_index < self.properties.len() {
                    Some(NavTarget::Property(ListingRef::Index(self.selected_index)))
                } else {
                    None
                }
            }
            AppState::BlogList => {
                let post = self.blog_posts.get(self.selected_index)?;
                let listing_ref = match &post.id {
                    Some(id) => ListingRef::Id(id.clone()),
                    None => ListingRef::Index(self.selected_index),
                };
                Some(NavTarget::BlogPost(listing_ref))
            }
            _ => None,
        }
    }

    /// Scrolls a detail view down
    fn scroll_down(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_add(1);
    }

    /// Scrolls a detail view up
    fn scroll_up(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit (from any non-overlay view)
    /// - `Up`/`k`, `Down`/`j`: Move selection / scroll detail
    /// - `Enter`: Open the selected listing's detail view
    /// - `Tab`: Switch between properties and insights
    /// - `/`: Open the search overlay
    /// - `r`: Force a refresh (clear caches and reload)
    /// - `?`: Toggle the help overlay
    /// - `Esc`/`Backspace` (in detail): Back to the list
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Search overlay intercepts all keys while open
        if self.search_active {
            self.handle_search_key(key_event);
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::PropertyList | AppState::BlogList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    self.pending_nav = self.selected_target();
                }
                KeyCode::Tab => {
                    self.state = if self.state == AppState::PropertyList {
                        AppState::BlogList
                    } else {
                        AppState::PropertyList
                    };
                    self.selected_index = 0;
                }
                KeyCode::Char('/') => {
                    self.search_active = true;
                    self.search_query.clear();
                    self.search_selected = 0;
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::PropertyDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.detail_scroll_offset = 0;
                    self.state = AppState::PropertyList;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::BlogDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.detail_scroll_offset = 0;
                    self.open_post = None;
                    self.state = AppState::BlogList;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('r') => {
                    self.refresh_requested = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Handles keys while the search overlay is open
    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.search_active = false;
                self.search_query.clear();
                self.search_selected = 0;
            }
            KeyCode::Enter => {
                let hits = self.search_hits();
                if let Some(hit) = hits.get(self.search_selected) {
                    self.pending_nav = Some(hit.target.clone());
                    self.search_active = false;
                    self.search_query.clear();
                    self.search_selected = 0;
                }
            }
            KeyCode::Up => {
                if self.search_selected > 0 {
                    self.search_selected -= 1;
                }
            }
            KeyCode::Down => {
                let hits = self.search_hits().len();
                if hits > 0 && self.search_selected < hits - 1 {
                    self.search_selected += 1;
                }
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.search_selected = 0;
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.search_selected = 0;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

use crate::catalog::ProductId;
use crate::nav::History;
use crate::ui::product::{FetchSettled, ProductDetailView, ProductViewState};

/// Terminal host for the product detail view.
///
/// Owns the navigation history and the identifier prompt; everything about
/// fetching lives in [`ProductDetailView`].
pub struct App {
    should_quit: bool,
    view: ProductDetailView<History>,
    /// Identifier being typed after `g`, if the prompt is open.
    prompt: Option<String>,
    catalog_label: String,
}

impl App {
    pub fn new(view: ProductDetailView<History>, catalog_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            view,
            prompt: None,
            catalog_label: catalog_label.into(),
        }
    }

    /// Pick up the initial identifier.
    pub fn start(&mut self) {
        self.view.sync();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &ProductViewState {
        self.view.state()
    }

    pub fn view(&self) -> &ProductDetailView<History> {
        &self.view
    }

    pub fn catalog_label(&self) -> &str {
        &self.catalog_label
    }

    pub fn on_settled(&mut self, settled: FetchSettled) {
        self.view.on_settled(settled);
    }

    /// Back to the previous product; leaving the first one quits.
    pub fn go_back(&mut self) {
        if !self.view.go_back() {
            self.request_quit();
        }
    }

    pub fn open(&mut self, id: ProductId) {
        self.view.navigation_mut().push(id);
        self.view.sync();
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    /// Open the neighbouring numeric identifier. Identifiers start at 1.
    pub fn step(&mut self, delta: i64) {
        let next = self
            .view
            .state()
            .id()
            .and_then(ProductId::as_number)
            .and_then(|current| current.checked_add_signed(delta))
            .filter(|next| *next >= 1);
        if let Some(next) = next {
            self.open(ProductId::from(next));
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(String::new());
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn prompt_push(&mut self, ch: char) {
        if let Some(buffer) = &mut self.prompt {
            buffer.push(ch);
        }
    }

    pub fn prompt_pop(&mut self) {
        if let Some(buffer) = &mut self.prompt {
            buffer.pop();
        }
    }

    /// Open whatever was typed. An empty prompt just closes.
    pub fn submit_prompt(&mut self) {
        if let Some(id) = self.prompt.take().and_then(|raw| ProductId::parse(&raw)) {
            self.open(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FetchError, Product, ProductSource};
    use crate::nav::Navigation;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct Empty;

    #[async_trait]
    impl ProductSource for Empty {
        async fn fetch_product(&self, _id: &ProductId) -> Result<Option<Product>, FetchError> {
            Ok(None)
        }
    }

    fn make_app(start: Option<&str>) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let history = History::starting_at(start.and_then(ProductId::parse));
        let view = ProductDetailView::new(
            history,
            Arc::new(Empty),
            tokio::runtime::Handle::current(),
            tx,
        );
        let mut app = App::new(view, "catalog");
        app.start();
        app
    }

    fn current(app: &App) -> Option<String> {
        app.view()
            .navigation()
            .current_id()
            .map(|id| id.as_str().to_string())
    }

    #[tokio::test]
    async fn back_from_first_entry_quits() {
        let mut app = make_app(Some("1"));
        app.go_back();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn back_returns_to_previous_product() {
        let mut app = make_app(Some("1"));
        app.open(ProductId::from(2));
        app.go_back();
        assert!(!app.should_quit());
        assert_eq!(current(&app).as_deref(), Some("1"));
        assert!(app.state().is_loading());
    }

    #[tokio::test]
    async fn step_moves_between_numeric_ids() {
        let mut app = make_app(Some("3"));
        app.step(1);
        assert_eq!(current(&app).as_deref(), Some("4"));
        app.step(-1);
        assert_eq!(current(&app).as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn step_never_goes_below_one() {
        let mut app = make_app(Some("1"));
        app.step(-1);
        assert_eq!(current(&app).as_deref(), Some("1"));
        assert_eq!(app.view().generation(), 1);
    }

    #[tokio::test]
    async fn prompt_opens_typed_identifier() {
        let mut app = make_app(None);
        assert_eq!(app.state(), &ProductViewState::Idle);

        app.open_prompt();
        app.prompt_push('1');
        app.prompt_push('2');
        app.prompt_push('x');
        app.prompt_pop();
        assert_eq!(app.prompt(), Some("12"));

        app.submit_prompt();
        assert_eq!(app.prompt(), None);
        assert_eq!(current(&app).as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn empty_prompt_does_nothing() {
        let mut app = make_app(Some("5"));
        app.open_prompt();
        app.submit_prompt();
        assert_eq!(current(&app).as_deref(), Some("5"));
        assert_eq!(app.view().generation(), 1);
    }
}

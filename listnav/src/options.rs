use alloc::string::String;
use alloc::sync::Arc;

/// A callback fired when the user activates the focused target (enter/space).
///
/// Receives the target handle and its registry index.
pub type SelectCallback<Id> = Arc<dyn Fn(Id, usize) + Send + Sync>;

/// A callback fired when the user cancels (escape).
pub type EscapeCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Navigator`].
///
/// Cheap to clone: callback slots are stored in `Arc`s, so adapters can update a field and call
/// `Navigator::set_options` without reallocating closures.
pub struct NavOptions<Id> {
    /// Selector pattern matched against container descendants when rebuilding the registry.
    pub item_selector: String,
    /// Wrap focus around at the ends (ArrowNext at the last item moves to the first).
    pub wrap: bool,
    /// When set, all key handling is a no-op.
    pub disabled: bool,
    /// Focus the first registry target on `mount`.
    pub focus_on_mount: bool,
    /// Idle interval after which the typeahead buffer auto-clears.
    pub typeahead_timeout_ms: u64,
    pub on_select: Option<SelectCallback<Id>>,
    pub on_escape: Option<EscapeCallback>,
}

impl<Id> NavOptions<Id> {
    pub fn new(item_selector: impl Into<String>) -> Self {
        Self {
            item_selector: item_selector.into(),
            wrap: true,
            disabled: false,
            focus_on_mount: false,
            typeahead_timeout_ms: 1000,
            on_select: None,
            on_escape: None,
        }
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_focus_on_mount(mut self, focus_on_mount: bool) -> Self {
        self.focus_on_mount = focus_on_mount;
        self
    }

    pub fn with_typeahead_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.typeahead_timeout_ms = timeout_ms;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(Id, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_escape(mut self, on_escape: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_escape = on_escape.map(|f| Arc::new(f) as _);
        self
    }
}

impl<Id> Clone for NavOptions<Id> {
    fn clone(&self) -> Self {
        Self {
            item_selector: self.item_selector.clone(),
            wrap: self.wrap,
            disabled: self.disabled,
            focus_on_mount: self.focus_on_mount,
            typeahead_timeout_ms: self.typeahead_timeout_ms,
            on_select: self.on_select.clone(),
            on_escape: self.on_escape.clone(),
        }
    }
}

impl<Id> core::fmt::Debug for NavOptions<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavOptions")
            .field("item_selector", &self.item_selector)
            .field("wrap", &self.wrap)
            .field("disabled", &self.disabled)
            .field("focus_on_mount", &self.focus_on_mount)
            .field("typeahead_timeout_ms", &self.typeahead_timeout_ms)
            .finish_non_exhaustive()
    }
}

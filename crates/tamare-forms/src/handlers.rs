use std::fmt;

type SaveFn<T> = Box<dyn FnOnce(T)>;
type CloseFn = Box<dyn FnOnce()>;

/// The save and close callbacks a form reports to.
///
/// Each callback is one-shot; firing it again is a no-op.
pub struct FormHandlers<T> {
    on_save: Option<SaveFn<T>>,
    on_close: Option<CloseFn>,
}

impl<T> FormHandlers<T> {
    pub fn new(on_save: impl FnOnce(T) + 'static, on_close: impl FnOnce() + 'static) -> Self {
        Self {
            on_save: Some(Box::new(on_save)),
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Handlers that discard every event.
    pub fn noop() -> Self {
        Self::new(|_| {}, || {})
    }

    pub(crate) fn save(&mut self, record: T) -> bool {
        match self.on_save.take() {
            Some(on_save) => {
                on_save(record);
                true
            }
            None => false,
        }
    }

    pub(crate) fn close(&mut self) -> bool {
        match self.on_close.take() {
            Some(on_close) => {
                on_close();
                true
            }
            None => false,
        }
    }

    pub fn saved(&self) -> bool {
        self.on_save.is_none()
    }
}

impl<T> fmt::Debug for FormHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormHandlers")
            .field("save_pending", &self.on_save.is_some())
            .field("close_pending", &self.on_close.is_some())
            .finish()
    }
}

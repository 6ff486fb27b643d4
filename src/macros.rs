/// Creates a [`StrView`] concatenating the arguments.
///
/// `strview!` accepts any comma-separated list of expressions implementing
/// [`AsRef<[u8]>`], copies their contents into a single exactly-sized
/// buffer and wraps it in a view. With no arguments it produces an empty
/// view without touching the heap contents at all.
///
/// # Examples
/// ```
/// use strview::strview;
///
/// let view = strview!["Hello", ", ", "World!"];
/// assert_eq!(view, "Hello, World!");
///
/// let empty = strview![];
/// assert!(empty.is_empty());
/// ```
///
/// Views and raw byte slices mix freely:
/// ```
/// use strview::{strview, StrView};
///
/// let greeting = StrView::new("Hello");
/// let view = strview![greeting, b", World!"];
/// assert_eq!(view, "Hello, World!");
/// ```
///
/// [`StrView`]: crate::StrView
/// [`AsRef<[u8]>`]: core::convert::AsRef
#[macro_export]
macro_rules! strview {
    () => {
        $crate::StrView::default()
    };

    ($($part: expr),+ $(,)?) => {{
        let parts = [$($crate::StrView::new(&$part)),+];
        let len: usize = parts.iter().map(|part| part.len()).sum();

        let mut builder = $crate::StrView::builder(len);
        for part in &parts {
            builder = builder.put(part);
        }

        builder.finalize()
    }};
}

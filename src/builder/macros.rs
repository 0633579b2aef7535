//! Macros for ergonomic snapshot construction.

/// Build a [`Snapshot`](crate::core::Snapshot) from `key => value` pairs.
///
/// Entries keep the order they are written in. Values accept anything that
/// converts into a [`Value`](crate::core::Value).
///
/// # Example
///
/// ```
/// use sprout::snapshot;
///
/// let phil = snapshot! {
///     "soil" => 10,
///     "name" => "Phil",
/// };
///
/// assert_eq!(phil.number("soil"), Some(10.0));
/// assert_eq!(phil.keys().collect::<Vec<_>>(), vec!["soil", "name"]);
/// ```
#[macro_export]
macro_rules! snapshot {
    () => {
        $crate::core::Snapshot::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::core::Snapshot::new()
            $(.with($key, $value))+
    };
}

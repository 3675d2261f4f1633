//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

/// A pure view that renders based on props
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering
/// 2. `render` is a pure function of props (plus internal UI state like scroll position)
///
/// Input never reaches components directly: keys become commands, the
/// [`Document`](crate::Document) turns commands into events, and events
/// become actions on the bus.
///
/// # Example
///
/// ```ignore
/// use filter_panel::{Component, Frame, Rect};
///
/// struct Counter;
///
/// struct CounterProps {
///     count: usize,
/// }
///
/// impl Component for Counter {
///     type Props<'a> = CounterProps;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("{} matches", props.count);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

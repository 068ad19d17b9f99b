/// What the header cart badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterView {
    /// Badge hidden; its text is left as it was.
    Hidden,
    Visible(i64),
}

impl CounterView {
    pub fn from_count(count: i64) -> Self {
        if count < 1 {
            CounterView::Hidden
        } else {
            CounterView::Visible(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_below_one() {
        assert_eq!(CounterView::from_count(0), CounterView::Hidden);
        assert_eq!(CounterView::from_count(-2), CounterView::Hidden);
    }

    #[test]
    fn test_visible_from_one() {
        assert_eq!(CounterView::from_count(1), CounterView::Visible(1));
        assert_eq!(CounterView::from_count(17), CounterView::Visible(17));
    }
}

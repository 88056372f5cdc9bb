use crate::list_state::ListState;

/// Why a list has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// No search is active and the collection is empty.
    NoData,
    /// A search is active and matched nothing.
    NoResults(String),
}

/// The top-level render state of one list. Exactly one applies at a time,
/// checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The last fetch failed. Item data is not shown at all, even when
    /// earlier pages are still held in the store.
    Error { message: String },
    /// Settled with no items.
    Empty(EmptyReason),
    /// The windowed list. `overlay_loading` asks for a full-size loading
    /// indicator because nothing has arrived yet.
    Items { overlay_loading: bool },
}

impl ListView {
    pub fn classify(state: &ListState) -> ListView {
        if let Some(message) = &state.error {
            return ListView::Error {
                message: message.clone(),
            };
        }
        if !state.is_loading && state.items.is_empty() {
            let reason = if state.is_searching() {
                EmptyReason::NoResults(state.search_query.clone())
            } else {
                EmptyReason::NoData
            };
            return ListView::Empty(reason);
        }
        ListView::Items {
            overlay_loading: state.is_loading && state.items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_state::ListAction;
    use crate::record::sample;

    #[test]
    fn error_wins_over_items() {
        let state = ListState::default()
            .reduce(ListAction::AddItems(vec![sample(1)]))
            .reduce(ListAction::SetError(Some("Failed to load users".into())));
        assert_eq!(
            ListView::classify(&state),
            ListView::Error {
                message: "Failed to load users".into()
            }
        );
    }

    #[test]
    fn empty_distinguishes_search() {
        let idle = ListState::default();
        assert_eq!(ListView::classify(&idle), ListView::Empty(EmptyReason::NoData));

        let searched = ListState::default().reduce(ListAction::SetSearchQuery("jane".into()));
        assert_eq!(
            ListView::classify(&searched),
            ListView::Empty(EmptyReason::NoResults("jane".into()))
        );
    }

    #[test]
    fn first_load_overlays_spinner() {
        let loading = ListState::default().reduce(ListAction::SetLoading(true));
        assert_eq!(
            ListView::classify(&loading),
            ListView::Items {
                overlay_loading: true
            }
        );

        let more = loading.reduce(ListAction::AddItems(vec![sample(1)]));
        assert_eq!(
            ListView::classify(&more),
            ListView::Items {
                overlay_loading: false
            }
        );
    }
}

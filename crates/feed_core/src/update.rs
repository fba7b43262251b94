use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewportMeasured { width } => match state.measure_viewport(width) {
            Some(generation) => vec![Effect::FetchFeed { generation }],
            None => Vec::new(),
        },
        Msg::FeedLoaded { generation, images } => state
            .publish_feed(generation, images)
            .into_iter()
            .map(|(id, uri)| Effect::LoadImage {
                generation,
                id,
                uri,
            })
            .collect(),
        Msg::FeedFailed { generation } => {
            state.feed_failed(generation);
            Vec::new()
        }
        Msg::ImageLoaded { generation, id } => {
            state.image_loaded(generation, &id);
            Vec::new()
        }
        Msg::UpdateStatusChanged(event) => {
            if event.needs_label() {
                // The prior status keeps showing until the label resolves.
                vec![Effect::LookupUpdateMetadata { event }]
            } else {
                state.set_update_status(event, "");
                Vec::new()
            }
        }
        Msg::UpdateMetadataResolved { event, label } => {
            state.set_update_status(event, &label);
            Vec::new()
        }
        Msg::Tick { elapsed_ms } => {
            state.tick(elapsed_ms);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

use crate::{ChannelState, ClientState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ClientState, msg: Msg) -> (ClientState, Vec<Effect>) {
    // The feed emits nothing after closure; drop anything a driver replays.
    if state.channel() == ChannelState::Closed {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::ChannelOpened => {
            state.mark_open();
            state.set_status("Started");
            vec![Effect::ShowStatus("Started".to_string())]
        }
        Msg::CloseRequested => {
            state.set_status("Exiting...");
            let mut effects = vec![Effect::ShowStatus("Exiting...".to_string())];
            if state.request_close() {
                effects.push(Effect::ScheduleClose);
            }
            effects
        }
        Msg::ProgressStepped => {
            let width = state.step_progress();
            vec![Effect::SetProgressWidth(width)]
        }
        Msg::ProgressMaxSet(max) => {
            // The bar repaints on the next step, not when the total changes.
            state.set_progress_max(max);
            Vec::new()
        }
        Msg::TitleChanged(text) => {
            state.set_title(text.clone());
            vec![Effect::ShowTitle(text)]
        }
        Msg::StatusPosted(text) => {
            state.set_status(text.clone());
            vec![Effect::ShowStatus(text)]
        }
        Msg::ChannelFailed { message } => {
            let shown = format!("Error: {message}");
            state.set_status(shown.clone());
            vec![Effect::ShowStatus(shown)]
        }
        Msg::ChannelClosed => {
            state.mark_closed();
            if state.request_close() {
                vec![Effect::ScheduleClose]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

use super::{Input, TerminalView, controller};
use crate::{
    controller::Field,
    error::FlowError,
    warning,
};

pub async fn create(
    name: String,
    description: Option<String>,
    open: bool,
) -> Result<(), FlowError> {
    let mut view = TerminalView::new(None).with_field(Field::PlaylistName, name);
    if let Some(description) = description {
        view = view.with_field(Field::PlaylistDescription, description);
    }

    let playlist = controller(view).create_playlist().await?;

    if open {
        if let Some(url) = playlist.and_then(|p| p.url) {
            if webbrowser::open(&url).is_err() {
                warning!(
                    "Failed to open browser. The playlist is at:\n{}",
                    url
                );
            }
        }
    }
    Ok(())
}

pub async fn add(track_uri: String) -> Result<(), FlowError> {
    controller(TerminalView::new(None))
        .add_to_playlist(&track_uri)
        .await
}

pub async fn finish(yes: bool) -> Result<(), FlowError> {
    let input = (!yes).then(Input::stdin);
    let view = TerminalView::new(input).assume_yes(yes);
    controller(view)
        .finish()
        .await
        .map(|_| ())
        .inspect_err(|e| warning!("Finish failed: {}", e))
}

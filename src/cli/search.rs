use super::{TerminalView, controller};
use crate::{controller::Field, error::FlowError, info};

pub async fn search(query: String) -> Result<(), FlowError> {
    let view = TerminalView::new(None).with_field(Field::SearchQuery, query);

    if controller(view).search().await?.is_none() {
        info!("Nothing to search for.");
    }
    Ok(())
}

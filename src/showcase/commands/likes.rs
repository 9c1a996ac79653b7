use crate::commands::{CmdMessage, CmdResult, DisplayItem};
use crate::error::{Result, ShowcaseError};
use crate::model::ItemId;
use crate::session::Session;
use tracing::debug;

pub fn toggle(session: &mut Session, id: ItemId) -> Result<CmdResult> {
    let view = session.view();
    let cv = session.catalog_view_mut("liking")?;
    let item = cv
        .catalog
        .get(id)
        .ok_or(ShowcaseError::ItemNotFound { view, id })?;
    let title = item.title.clone();

    let liked = cv.likes.toggle(id);
    debug!(%view, %id, liked, "like toggled");

    let verb = if liked { "Liked" } else { "Unliked" };
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{} ({}): {}",
        verb, id, title
    ))))
}

/// Lists the liked items of the current view, in catalog order.
pub fn list(session: &Session) -> Result<CmdResult> {
    let cv = session.catalog_view("listing likes")?;
    let listed: Vec<DisplayItem> = cv
        .catalog
        .items
        .iter()
        .filter(|item| cv.likes.contains(item.id))
        .map(|item| DisplayItem {
            item: item.clone(),
            liked: true,
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("Nothing liked yet."));
    }
    Ok(result.with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::browse;
    use crate::model::ViewKind;
    use crate::store::builtin::BuiltinSource;

    fn open(view: ViewKind) -> Session {
        Session::open(&BuiltinSource::new(), view).unwrap()
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut session = open(ViewKind::Discover);
        let result = toggle(&mut session, ItemId(2)).unwrap();
        assert_eq!(result.messages[0].content, "Liked (2): UI/UX Design Principles");

        let result = toggle(&mut session, ItemId(2)).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Unliked (2): UI/UX Design Principles"
        );
        assert!(list(&session).unwrap().listed_items.is_empty());
    }

    #[test]
    fn likes_do_not_change_visibility() {
        let mut session = open(ViewKind::Discover);
        let before = browse::run(&session, true).unwrap().listed_items.len();
        toggle(&mut session, ItemId(1)).unwrap();
        toggle(&mut session, ItemId(3)).unwrap();
        let after = browse::run(&session, true).unwrap().listed_items.len();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut session = open(ViewKind::Discover);
        let err = toggle(&mut session, ItemId(99)).unwrap_err();
        assert!(matches!(err, ShowcaseError::ItemNotFound { id: ItemId(99), .. }));
    }

    #[test]
    fn playlists_can_unlike_seeded_items() {
        let mut session = open(ViewKind::Playlists);
        let ids = |s: &Session| -> Vec<u32> {
            list(s)
                .unwrap()
                .listed_items
                .iter()
                .map(|d| d.item.id.0)
                .collect()
        };
        assert_eq!(ids(&session), vec![1, 3, 5]);
        toggle(&mut session, ItemId(3)).unwrap();
        toggle(&mut session, ItemId(6)).unwrap();
        assert_eq!(ids(&session), vec![1, 5, 6]);
    }
}

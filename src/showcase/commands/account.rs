use crate::commands::{CmdMessage, CmdResult, ProfileView};
use crate::draft::EditSession;
use crate::error::Result;
use crate::model::{Profile, ProfileField};
use crate::session::Session;
use tracing::debug;

fn profile_view(edit: &EditSession<Profile>) -> ProfileView {
    ProfileView {
        profile: edit.committed().clone(),
        draft: edit.is_editing().then(|| edit.draft().clone()),
    }
}

pub fn show(session: &Session) -> Result<CmdResult> {
    let edit = session.account("showing the profile")?;
    Ok(CmdResult::default().with_profile(profile_view(edit)))
}

pub fn begin(session: &mut Session) -> Result<CmdResult> {
    let edit = session.account_mut("editing")?;
    let message = if edit.is_editing() {
        CmdMessage::info("Already editing")
    } else {
        edit.begin();
        debug!("edit session started");
        CmdMessage::info("Editing profile. Use set, then save or cancel.")
    };
    Ok(CmdResult::default()
        .with_profile(profile_view(edit))
        .with_message(message))
}

/// Writes a field of the draft. Values are taken as typed.
pub fn set_field(session: &mut Session, field: ProfileField, value: &str) -> Result<CmdResult> {
    let edit = session.account_mut("editing")?;
    edit.draft_mut()?.set_field(field, value.to_string());
    debug!(%field, "draft field updated");
    Ok(CmdResult::default()
        .with_profile(profile_view(edit))
        .with_message(CmdMessage::info(format!("Draft {} set to \"{}\"", field, value))))
}

pub fn save(session: &mut Session) -> Result<CmdResult> {
    let edit = session.account_mut("saving")?;
    let changed = edit.save()?;
    debug!(changed, "profile saved");

    let message = if changed {
        CmdMessage::success("Profile saved")
    } else {
        CmdMessage::info("No changes to save")
    };
    Ok(CmdResult::default()
        .with_profile(profile_view(edit))
        .with_message(message))
}

pub fn cancel(session: &mut Session) -> Result<CmdResult> {
    let edit = session.account_mut("cancelling")?;
    edit.cancel()?;
    debug!("edit session cancelled");
    Ok(CmdResult::default()
        .with_profile(profile_view(edit))
        .with_message(CmdMessage::warning("Changes discarded")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::model::ViewKind;
    use crate::store::builtin::BuiltinSource;

    fn account() -> Session {
        Session::open(&BuiltinSource::new(), ViewKind::Account).unwrap()
    }

    #[test]
    fn show_has_no_draft_outside_edit() {
        let result = show(&account()).unwrap();
        let view = result.profile.unwrap();
        assert_eq!(view.profile.email, "alex.johnson@example.com");
        assert!(view.draft.is_none());
    }

    #[test]
    fn save_commits_edited_fields() {
        let mut session = account();
        begin(&mut session).unwrap();
        set_field(&mut session, ProfileField::Name, "Sam Lee").unwrap();
        set_field(&mut session, ProfileField::Email, "sam@example.com").unwrap();

        let shown = show(&session).unwrap().profile.unwrap();
        assert_eq!(shown.profile.name, "Alex Johnson");
        assert_eq!(shown.draft.unwrap().name, "Sam Lee");

        let result = save(&mut session).unwrap();
        assert_eq!(result.messages[0].content, "Profile saved");
        let view = result.profile.unwrap();
        assert_eq!(view.profile.name, "Sam Lee");
        assert_eq!(view.profile.email, "sam@example.com");
        assert!(view.draft.is_none());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut session = account();
        begin(&mut session).unwrap();
        set_field(&mut session, ProfileField::Name, "Sam").unwrap();
        cancel(&mut session).unwrap();

        begin(&mut session).unwrap();
        let view = show(&session).unwrap().profile.unwrap();
        assert_eq!(view.draft.unwrap().name, "Alex Johnson");
    }

    #[test]
    fn save_without_changes_is_informational() {
        let mut session = account();
        begin(&mut session).unwrap();
        let result = save(&mut session).unwrap();
        assert_eq!(result.messages[0].content, "No changes to save");
    }

    #[test]
    fn editing_requires_begin() {
        let mut session = account();
        assert!(matches!(
            set_field(&mut session, ProfileField::Name, "x"),
            Err(ShowcaseError::NotEditing)
        ));
        assert!(matches!(save(&mut session), Err(ShowcaseError::NotEditing)));
        assert!(matches!(cancel(&mut session), Err(ShowcaseError::NotEditing)));
    }

    #[test]
    fn navigating_away_discards_committed_edits() {
        let source = BuiltinSource::new();
        let mut session = Session::open(&source, ViewKind::Account).unwrap();
        begin(&mut session).unwrap();
        set_field(&mut session, ProfileField::Name, "Sam").unwrap();
        save(&mut session).unwrap();

        let session = Session::open(&source, ViewKind::Account).unwrap();
        assert_eq!(
            show(&session).unwrap().profile.unwrap().profile.name,
            "Alex Johnson"
        );
    }

    #[test]
    fn catalog_views_have_no_profile() {
        let session = Session::open(&BuiltinSource::new(), ViewKind::Home).unwrap();
        assert!(matches!(
            show(&session),
            Err(ShowcaseError::WrongView { .. })
        ));
    }
}

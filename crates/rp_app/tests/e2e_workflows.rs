use std::path::Path;

use pretty_assertions::assert_eq;
use rp_app::actions::AppAction;
use rp_app::driver::AppDriver;
use rp_app::prefs::AppPrefs;
use rp_core::workspace::Workspace;
use tempfile::TempDir;

const RST: &str = "\
==========
Bevezetés
==========

Ez az első bekezdés,
két sorban.

.. note::

   Ez egy kódrészlet.

* Egy felsorolás

.. rubric:: Lábjegyzet

   Behúzott lábjegyzet.
";

const PO: &str = r#"# Guide translation.
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

#: ../../source/intro.rst:3
msgid "Introduction"
msgstr ""

#: ../../source/intro.rst:6
msgid ""
"This is the first paragraph, "
"in two lines."
msgstr ""

#: ../../source/intro.rst:13
msgid "A bullet"
msgstr ""

#: ../../source/intro.rst:17
msgid "Indented footnote."
msgstr ""
"#;

fn write_pair(dir: &TempDir) -> Workspace {
    let base = dir.path().join("intro");
    std::fs::write(base.with_extension("rst"), RST).expect("write rst");
    std::fs::write(base.with_extension("po"), PO).expect("write po");
    Workspace::from_basename(base.to_str().expect("utf-8 temp path"))
}

fn opened(dir: &TempDir) -> AppDriver {
    let mut driver = AppDriver::new();
    driver
        .dispatch(AppAction::Open(write_pair(dir)))
        .expect("open");
    driver
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read output")
}

#[test]
fn e2e_open_001_lists_paragraphs_and_messages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let driver = opened(&dir);
    let snapshot = driver.snapshot();

    assert_eq!(snapshot.paragraphs, 4);
    assert_eq!(snapshot.messages, 4);
    assert_eq!(snapshot.translated, 0);
    assert_eq!(snapshot.selected_paragraph, Some(0));
    assert_eq!(snapshot.selected_message, Some(0));

    let texts = driver
        .state()
        .session
        .paragraphs()
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            "Bevezetés",
            "Ez az első bekezdés,\nkét sorban.",
            "Egy felsorolás",
            "Behúzott lábjegyzet.",
        ]
    );
}

#[test]
fn e2e_pair_001_pair_everything_and_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut driver = opened(&dir);

    for index in 0..4 {
        driver
            .dispatch(AppAction::PairParagraph(index))
            .expect("pair");
    }
    assert_eq!(driver.snapshot().translated, 4);
    assert!(driver.snapshot().dirty);

    driver.dispatch(AppAction::Save).expect("save");
    let saved = dir.path().join("merged").join("intro.po");
    assert_eq!(driver.state().last_saved.as_deref(), Some(saved.as_path()));
    assert!(!driver.snapshot().dirty);

    let expected = PO
        .replacen(
            "msgid \"Introduction\"\nmsgstr \"\"",
            "msgid \"Introduction\"\nmsgstr \"Bevezetés\"",
            1,
        )
        .replacen(
            "\"in two lines.\"\nmsgstr \"\"",
            "\"in two lines.\"\nmsgstr \"\"\n\"Ez az első bekezdés, \"\n\"két sorban.\"",
            1,
        )
        .replacen(
            "msgid \"A bullet\"\nmsgstr \"\"",
            "msgid \"A bullet\"\nmsgstr \"Egy felsorolás\"",
            1,
        )
        .replacen(
            "msgid \"Indented footnote.\"\nmsgstr \"\"",
            "msgid \"Indented footnote.\"\nmsgstr \"Behúzott lábjegyzet.\"",
            1,
        );
    assert_eq!(read(&saved), expected);
}

#[test]
fn e2e_pair_002_clear_and_undo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut driver = opened(&dir);

    driver.dispatch(AppAction::PairSelected).expect("pair");
    driver.dispatch(AppAction::ClearMessage(0)).expect("clear");
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.translated, 0);
    assert_eq!(snapshot.selected_message, Some(0));
    assert_eq!(snapshot.selected_paragraph, Some(1));

    driver.dispatch(AppAction::Undo).expect("undo");
    assert_eq!(driver.snapshot().translated, 1);
    driver.dispatch(AppAction::Undo).expect("undo");
    assert_eq!(driver.snapshot().translated, 0);
    driver.dispatch(AppAction::Redo).expect("redo");
    assert_eq!(
        driver.state().session.catalog().messages[0].target_text(),
        "Bevezetés"
    );
}

#[test]
fn e2e_pair_003_skip_a_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut driver = opened(&dir);

    driver.dispatch(AppAction::SelectMessage(2)).expect("select");
    driver.dispatch(AppAction::PairParagraph(2)).expect("pair");
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.selected_paragraph, Some(3));
    assert_eq!(snapshot.selected_message, Some(3));
    assert_eq!(
        driver.state().session.catalog().messages[2].target_text(),
        "Egy felsorolás"
    );
}

#[test]
fn e2e_pair_004_bad_index_keeps_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut driver = opened(&dir);

    assert!(driver.dispatch(AppAction::PairParagraph(40)).is_err());
    let snapshot = driver.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("paragraph 40 does not exist"));
    assert_eq!(snapshot.selected_paragraph, Some(0));
    assert_eq!(snapshot.translated, 0);

    driver.dispatch(AppAction::SelectParagraph(1)).expect("select");
    assert_eq!(driver.snapshot().error, None);
}

#[test]
fn e2e_save_001_custom_merged_dir_and_save_as() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = AppPrefs {
        merged_dir: "kesz".to_string(),
        ..AppPrefs::default()
    };
    let mut driver = AppDriver::with_prefs(prefs);
    driver
        .dispatch(AppAction::Open(write_pair(&dir)))
        .expect("open");

    driver.dispatch(AppAction::Save).expect("save");
    assert_eq!(read(&dir.path().join("kesz").join("intro.po")), PO);

    let other = dir.path().join("elsewhere").join("out.po");
    driver
        .dispatch(AppAction::SaveAsPath(other.clone()))
        .expect("save as");
    assert_eq!(read(&other), PO);
}

#[test]
fn e2e_open_002_missing_po_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("lonely");
    std::fs::write(base.with_extension("rst"), RST).expect("write rst");

    let mut driver = AppDriver::new();
    let err = driver
        .dispatch(AppAction::Open(Workspace::from_basename(
            base.to_str().expect("utf-8 temp path"),
        )))
        .expect_err("missing po");
    assert!(err.to_string().ends_with("lonely.po"));
    assert_eq!(driver.snapshot().messages, 0);
}

#[test]
fn e2e_quit_001_quit_sets_flag() {
    let mut driver = AppDriver::new();
    driver.dispatch(AppAction::Quit).expect("quit");
    assert!(driver.snapshot().quit_requested);
}

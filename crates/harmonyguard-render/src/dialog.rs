use crate::{RenderableConflict, RenderableConflictKind, RenderableInstall};
use regex::Regex;
use std::sync::OnceLock;

pub const DIALOG_TITLE: &str = "Harmony installation error";
pub const QUIT_ACTION_LABEL: &str = "Quit KSP";

/// Assemble the rich-text dialog body for one conflict section.
///
/// The markup is the host UI's rich-text dialect: `<b>` and `<color=...>`
/// tags. `render_plain` strips it for the log sink.
pub fn render_dialog_body(conflict: &RenderableConflict) -> String {
    let mut out = String::new();
    let canonical = white(&conflict.canonical_path);

    match conflict.kind {
        RenderableConflictKind::DuplicateChecker => {
            out.push_str(
                "Multiple Harmony installations detected, please read the following message \
                 and correct your installation !\n\n",
            );

            // Only the misplaced copies get their own line; the summary line
            // names the canonical install when one exists.
            for install in conflict.installs.iter().filter(|i| !i.correct) {
                out.push_str(&format!(
                    "Harmony is {} installed in {}\n",
                    red("wrongly"),
                    white(&install.display_path)
                ));
            }

            if conflict.right_path_exists {
                out.push_str(&format!(
                    "\nHarmony is {} installed in {}, remove the other installation(s).",
                    green("correctly"),
                    canonical
                ));
            } else {
                out.push_str(&format!("\nHarmony should be installed in {} !", canonical));
            }
        }
        RenderableConflictKind::DuplicateHarmony => {
            out.push_str(
                "Multiple Harmony installations detected, please close KSP and correct \
                 your installation !\n\n",
            );

            for install in &conflict.installs {
                out.push_str(&harmony_install_line(install));

                if install.deprecated {
                    out.push_str(&format!(
                        "Also, this is Harmony v1, which is deprecated and {} with this \
                         distribution of Harmony v2.\nRemove that mod, and please ask the \
                         author to use the community distributed Harmony instead.\n",
                        red("conflicts")
                    ));
                }

                out.push('\n');
            }

            if !conflict.right_path_exists {
                out.push_str(&format!("\nHarmony should be installed in {} !", canonical));
            }
        }
    }

    out
}

fn harmony_install_line(install: &RenderableInstall) -> String {
    let version = install.version.as_deref().unwrap_or("(unknown version)");
    if install.correct {
        format!(
            "Harmony {} is {} installed in {}\nRemove the other installation(s).\n",
            version,
            green("correctly"),
            white(&install.display_path)
        )
    } else {
        format!(
            "Harmony {} is {} installed in {}\n",
            version,
            red("wrongly"),
            white(&install.display_path)
        )
    }
}

/// Strip every `<...>` tag for the plain-text log sink.
pub fn render_plain(body: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new("<[^>]*>").expect("tag pattern is valid"));
    tag.replace_all(body, "").into_owned()
}

fn red(text: &str) -> String {
    format!("<b><color=red>{text}</color></b>")
}

fn green(text: &str) -> String {
    format!("<b><color=green>{text}</color></b>")
}

fn white(text: &str) -> String {
    format!("<b><color=white>{text}</color></b>")
}

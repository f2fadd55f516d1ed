// src/core/catalog.rs

//! The built-in app and group tables of this workstation.
//!
//! The settings file can redefine any entry here or add new ones.

use crate::core::registry::Registry;
use crate::core::shell_commands::{KillOptions, ps_aux_kill};
use crate::models::{Action, App, MemberRef};

fn apps() -> Vec<App> {
    // Signal is hard to kill, so it gets two rounds.
    let signal_kill: Vec<&str> = ["sleep .5", "pkill Signal"].repeat(2);

    vec![
        App::new("Spotify"),
        App::new("Spotify - now playing"),
        App::new("Telegram").kill_commands(["pkill -9 Telegram"]),
        App::new("WhatsApp"),
        App::new("Signal").kill_commands(signal_kill),
        App::new("Visual Studio Code").pkill("Electron"),
        App::new("Brave Browser"),
        App::new("Brave Browser Beta"),
        App::new("Skype"),
        App::new("Toggl Track"),
        App::new("PyCharm").pkill("pycharm"),
        App::new("zoom.us"),
        App::new("ScanSnapHomeMain")
            .kill_commands([ps_aux_kill("scansnap", &KillOptions::default())]),
        App::new("Finicky"),
        App::new("Docker"),
        // Force-killing OneDrive can leave sync errors behind.
        App::new("OneDrive").kill_commands(["echo Quit OneDrive manually to avoid sync errors"]),
        App::new("Dropbox"),
        App::new("dontforget")
            .cli()
            .open_commands(["dontforget menu"])
            .background()
            .kill_commands([ps_aux_kill("dontforget", &KillOptions::default())]),
        App::new("KeepingYouAwake"),
        App::new("RescueTime"),
        App::new("BeardedSpice"),
        App::new("Private Internet Access"),
        App::new("Slack"),
        App::new("Hammerspoon"),
        // Bluetooth only goes off when switching laptops, not with `off`.
        App::new("blueutil")
            .cli()
            .open_commands(["blueutil -p 1"])
            .kill_commands(["blueutil -p 0"])
            .collection("switch"),
        App::new("Tunnelblick"),
        App::new("Cloudflare WARP")
            .kill_commands(["warp-cli disconnect", "pkill 'Cloudflare WARP'"]),
        App::new("Todoist"),
        App::new("Bitwarden"),
        App::new("VLC"),
        App::new("XQuartz").kill_commands(["pkill -9 launchd_startx"]),
        App::new("Be Focused"),
        App::new("flameshot"),
        App::new("DeepL"),
        App::new("AppPolice"),
        App::new("Extensions.prefPane")
            .path("/System/Library/PreferencePanes/Extensions.prefPane"),
        App::new("Activity Monitor")
            .path("/System/Applications/Utilities/Activity Monitor.app"),
        App::new("JetBrains Toolbox").pkill("jetbrains-toolbox"),
        App::new("Postman"),
        App::new("Gnucash"),
        App::new("lghub"),
        App::new("DYMO.DLS.Printing.Host"),
        App::new("SimpleFloatingClock"),
        App::new("Logseq"),
    ]
}

fn members(entries: &[&str]) -> Vec<MemberRef> {
    entries.iter().map(|raw| MemberRef::parse(raw)).collect()
}

/// Registers the built-in apps, then the built-in groups.
pub fn seed(registry: &mut Registry) {
    for app in apps() {
        registry.apps.register(app);
    }

    let groups = &mut registry.groups;
    groups.define(
        "off",
        "Turn off all apps and go to sleep",
        Action::Close,
        Vec::new(),
    );
    groups.define(
        "switch",
        "Turn off all apps before switching laptops",
        Action::Close,
        members(&["groups.off", "blueutil"]),
    );
    groups.define(
        "background",
        "Background apps",
        Action::Open,
        members(&[
            "groups.minimal",
            "OneDrive",
            "KeepingYouAwake",
            "Todoist",
            "RescueTime",
            "Toggl Track",
            "Docker",
            "dontforget",
            "Bitwarden",
            "Logseq",
        ]),
    );
    groups.define(
        "minimal",
        "Minimalistic apps",
        Action::Open,
        members(&["blueutil", "Finicky", "Hammerspoon"]),
    );
    groups.define(
        "sync",
        "Sync apps",
        Action::Open,
        members(&["OneDrive", "Extensions.prefPane", "Activity Monitor"]),
    );
    groups.define(
        "web",
        "Browse the web",
        Action::Open,
        members(&["Finicky", "Brave Browser Beta"]),
    );
    groups.define(
        "nitpick",
        "Nitpick",
        Action::Open,
        members(&[
            "Hammerspoon",
            "groups.web",
            "Toggl Track",
            "Visual Studio Code",
            "PyCharm",
        ]),
    );
    groups.define(
        "development",
        "Development",
        Action::Open,
        members(&[
            "Toggl Track",
            "Docker",
            "groups.web",
            "Visual Studio Code",
            "PyCharm",
        ]),
    );
    groups.define(
        "music",
        "Listen to music",
        Action::Open,
        members(&["Spotify", "Spotify - now playing", "BeardedSpice"]),
    );
    groups.define(
        "psychotherapy",
        "Therapy",
        Action::Open,
        members(&[
            "groups.minimal",
            "KeepingYouAwake",
            "Skype",
            "Gnucash",
            "SimpleFloatingClock",
            "Logseq",
        ]),
    );
    groups.define(
        "work",
        "Work apps",
        Action::Open,
        members(&[
            "Finicky",
            "Brave Browser",
            "Visual Studio Code",
            "Slack",
            "Signal",
            "Telegram",
            "WhatsApp",
            "flameshot",
            "Cloudflare WARP",
            "JetBrains Toolbox",
        ]),
    );
    groups.define(
        "famiglia",
        "Video call with the family",
        Action::Open,
        members(&[
            "groups.minimal",
            "groups.web",
            "KeepingYouAwake",
            "Toggl Track",
            "Skype",
            "WhatsApp",
        ]),
    );
    groups.define(
        "pod-demo",
        "Pod demo in the bi-weekly BA Review",
        Action::Open,
        members(&[
            "blueutil",
            "Finicky",
            "Hammerspoon",
            "Brave Browser",
            "KeepingYouAwake",
            "Visual Studio Code",
            "zoom.us",
        ]),
    );
    groups.define(
        "chat",
        "Open all chat apps (plus DeepL to translate stuff)",
        Action::Open,
        members(&["Signal", "Telegram", "WhatsApp", "DeepL"]),
    );
    groups.define(
        "conference",
        "Open all video conference apps",
        Action::Open,
        members(&["zoom.us", "Skype"]),
    );
}

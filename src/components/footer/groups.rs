use super::types::{FooterGroup, FooterItem};
use crate::app::state::AppState;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.has_alert() {
        return vec![FooterGroup {
            name: "ALERT",
            items: vec![
                FooterItem {
                    key: "Enter/Esc",
                    desc: "ok",
                },
                FooterItem {
                    key: "q",
                    desc: "quit",
                },
            ],
        }];
    }

    vec![
        FooterGroup {
            name: "PICK",
            items: vec![
                FooterItem {
                    key: "j/k",
                    desc: "move",
                },
                FooterItem {
                    key: "Enter/r",
                    desc: "reload",
                },
            ],
        },
        FooterGroup {
            name: "APP",
            items: vec![FooterItem {
                key: "q",
                desc: "quit",
            }],
        },
    ]
}

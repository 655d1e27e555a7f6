#![allow(dead_code)]

use std::collections::HashMap;

use collate_mastery::{MasteryError, PageSource};

pub const MAX_LEVEL_CELL: &str = r#"<td data-value="5"><div class="progressBar-outer"><div class="progressBar-inner" style="width: 100.0%">Max level</div></div></td>"#;

pub fn tokens_cell(have: u8, max: u8) -> String {
    let mut cell = format!(r#"<td data-value="{have}">"#);
    for index in 0..max {
        if index < have {
            cell.push_str(r#"<img class="token" src="/img/token.png">"#);
        } else {
            cell.push_str(r#"<img class="token notEarned" src="/img/token.png">"#);
        }
    }
    cell.push_str(&format!(" {have}/{max} tokens</td>"));
    cell
}

pub fn points_cell(to_next: u64) -> String {
    format!(
        r#"<td class="collapsible"  data-value="{to_next}"><div class="progressBar-outer"><div class="progressBar-inner" style="width: 42.5%">{to_next} points to next level</div></div></td>"#
    )
}

/// One `<tr>` as served by the mastery site, tab-indented.
pub fn champion_row(id: u32, name: &str, level: u8, points: u64, progress_cell: &str) -> String {
    [
        "<tr>".to_string(),
        format!("\t<td><a href=\"/champion?champion={id}\">{name}</a></td>"),
        format!(
            "\t<td class=\"\" data-format-number=\"{level}\" data-value=\"{level}\">{level}</td>"
        ),
        format!(
            "\t<td class=\"collapsible\" data-value=\"{points}\" data-tooltip=\"tooltip\" title=\"{points}/21600 points (100%)\">{points}</td>"
        ),
        "\t<td data-value=\"0\"><img src=\"/img/chest.png\" class=\"chest notEarned\"></td>"
            .to_string(),
        "\t<td data-format-time=\"1700000000000\" data-value=\"1700000000000\" data-toggle=\"tooltip\"></td>"
            .to_string(),
        format!("\t{progress_cell}"),
        "</tr>".to_string(),
    ]
    .join("\n")
}

pub fn mastery_page(rows: &[String]) -> String {
    format!(
        "<html><body><table><thead><tr><th>Champion</th></tr></thead><tbody id=\"tbody\">\n{}\n</tbody></table></body></html>",
        rows.join("\n")
    )
}

/// Serves canned pages and records the order accounts were requested in.
#[derive(Debug, Default)]
pub struct FakePages {
    pub pages: HashMap<String, String>,
    pub requested: std::cell::RefCell<Vec<String>>,
}

impl FakePages {
    pub fn with_page(mut self, account: &str, page: String) -> Self {
        self.pages.insert(account.to_string(), page);
        self
    }
}

impl PageSource for FakePages {
    fn fetch_page(&self, account: &str) -> Result<String, MasteryError> {
        self.requested.borrow_mut().push(account.to_string());
        self.pages
            .get(account)
            .cloned()
            .ok_or_else(|| MasteryError::Upstream(format!("no page for {account}")))
    }
}

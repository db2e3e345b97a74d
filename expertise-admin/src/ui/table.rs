//! Data table
//!
//! Column definitions plus client-side filtering and sorting of the current
//! page. Pagination itself is server-side; the table only renders the footer.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;
use shared::util::parse_amount;
use shared::{PageMeta, Record, StatusCode};

use super::badge::StatusBadge;

/// Key used for sorting a column
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Decimal(Decimal),
    Text(String),
}

impl SortKey {
    /// Exact key of an amount string; unparseable amounts sort first
    pub fn amount(raw: &str) -> Self {
        SortKey::Decimal(parse_amount(raw).unwrap_or(Decimal::MIN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

pub struct Column<E> {
    pub key: &'static str,
    pub label: &'static str,
    pub render: fn(&E) -> String,
    pub sort_key: Option<fn(&E) -> SortKey>,
}

impl<E> Column<E> {
    pub fn new(key: &'static str, label: &'static str, render: fn(&E) -> String) -> Self {
        Self {
            key,
            label,
            render,
            sort_key: None,
        }
    }

    /// Sort with a typed key instead of the rendered text
    pub fn sort_by(mut self, sort_key: fn(&E) -> SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    fn key_for(&self, entity: &E) -> SortKey {
        match self.sort_key {
            Some(f) => f(entity),
            None => SortKey::Text((self.render)(entity).to_lowercase()),
        }
    }
}

/// Per-row action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Enable,
    Disable,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::View => "Voir",
            RowAction::Edit => "Modifier",
            RowAction::Delete => "Supprimer",
            RowAction::Enable => "Activer",
            RowAction::Disable => "Désactiver",
        }
    }
}

pub const DEFAULT_EMPTY_TEXT: &str = "Aucun résultat";
pub const LOADING_TEXT: &str = "Chargement...";
const STATUS_HEADER: &str = "Statut";
const ACTIONS_HEADER: &str = "Actions";

pub struct DataTable<E> {
    columns: Vec<Column<E>>,
    toggleable: bool,
    empty_text: String,
    filter: Option<String>,
    sort: Option<(&'static str, SortDirection)>,
    styled: bool,
}

impl<E: Record> DataTable<E> {
    pub fn new(columns: Vec<Column<E>>, toggleable: bool) -> Self {
        Self {
            columns,
            toggleable,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            filter: None,
            sort: None,
            styled: false,
        }
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Color the status badges (terminal output)
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn columns(&self) -> &[Column<E>] {
        &self.columns
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    /// Client-side text filter over rendered cells; blank clears it
    pub fn set_filter(&mut self, text: &str) {
        let text = text.trim().to_lowercase();
        self.filter = (!text.is_empty()).then_some(text);
    }

    /// Returns `false` for an unknown column
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> bool {
        match self.columns.iter().find(|c| c.key == key) {
            Some(column) => {
                self.sort = Some((column.key, direction));
                true
            }
            None => false,
        }
    }

    /// Click on a header: ascending first, then flips
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let direction = match self.sort {
            Some((current, SortDirection::Asc)) if current == key => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.set_sort(key, direction)
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers: Vec<&'static str> = self.columns.iter().map(|c| c.label).collect();
        headers.push(STATUS_HEADER);
        headers.push(ACTIONS_HEADER);
        headers
    }

    /// Visible rows after filter and sort
    pub fn rows<'a>(&self, items: &'a [E]) -> Vec<&'a E> {
        let mut rows: Vec<&E> = items.iter().filter(|e| self.matches(e)).collect();

        if let Some((key, direction)) = self.sort
            && let Some(column) = self.columns.iter().find(|c| c.key == key)
        {
            rows.sort_by(|a, b| {
                let ord = column.key_for(a).cmp(&column.key_for(b));
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        rows
    }

    fn matches(&self, entity: &E) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        self.columns
            .iter()
            .map(|c| (c.render)(entity))
            .chain(std::iter::once(StatusBadge::for_record(entity).text))
            .any(|cell| cell.to_lowercase().contains(filter.as_str()))
    }

    /// Rendered cells of one row, status and actions included
    pub fn cells(&self, entity: &E) -> Vec<String> {
        let mut cells: Vec<String> = self.columns.iter().map(|c| (c.render)(entity)).collect();
        cells.push(StatusBadge::for_record(entity).text);
        cells.push(
            self.row_actions(entity)
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" | "),
        );
        cells
    }

    /// Soft-deleted rows can only be viewed
    pub fn row_actions(&self, entity: &E) -> Vec<RowAction> {
        if entity.is_deleted() {
            return vec![RowAction::View];
        }
        let mut actions = vec![RowAction::View, RowAction::Edit, RowAction::Delete];
        if self.toggleable {
            match entity.status_code() {
                Some(StatusCode::Active) => actions.push(RowAction::Disable),
                _ => actions.push(RowAction::Enable),
            }
        }
        actions
    }

    /// Text rendering with the pagination footer
    pub fn render(&self, items: &[E], loading: bool, meta: Option<&PageMeta>) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(self.headers());

        let width = self.columns.len() + 2;
        if loading {
            table.add_row(placeholder_row(LOADING_TEXT, width));
        } else {
            let rows = self.rows(items);
            if rows.is_empty() {
                table.add_row(placeholder_row(&self.empty_text, width));
            }
            for entity in rows {
                let badge = StatusBadge::for_record(entity);
                let row: Vec<Cell> = self
                    .cells(entity)
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| {
                        let cell = Cell::new(text);
                        if self.styled && i == self.columns.len() {
                            cell.fg(badge.tone.color())
                        } else {
                            cell
                        }
                    })
                    .collect();
                table.add_row(row);
            }
        }

        let mut out = table.to_string();
        if let Some(meta) = meta {
            out.push('\n');
            out.push_str(&pagination_footer(meta));
        }
        out
    }
}

fn placeholder_row(text: &str, width: usize) -> Vec<String> {
    let mut row = vec![String::new(); width];
    row[0] = text.to_string();
    row
}

/// `‹ Précédent | Page 2 / 5 (120 éléments) | Suivant ›`
pub fn pagination_footer(meta: &PageMeta) -> String {
    let prev = if meta.has_prev() { "‹ Précédent" } else { "  " };
    let next = if meta.has_next() { "Suivant ›" } else { "  " };
    format!(
        "{} | Page {} / {} ({} éléments) | {}",
        prev,
        meta.current_page,
        meta.last_page.max(1),
        meta.total,
        next
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Bank;

    fn bank(id: i64, code: &str, name: &str, status: &str, deleted: bool) -> Bank {
        let mut json = serde_json::json!({
            "id": id, "code": code, "name": name,
            "status": {"id": 1, "code": status, "label": ""}
        });
        if deleted {
            json["deleted_at"] = serde_json::json!("2024-05-01T10:00:00Z");
        }
        serde_json::from_value(json).unwrap()
    }

    fn table() -> DataTable<Bank> {
        DataTable::new(
            vec![
                Column::new("id", "ID", |b: &Bank| b.id.to_string()).sort_by(|b| SortKey::Number(b.id)),
                Column::new("code", "Code", |b: &Bank| b.code.clone()),
                Column::new("name", "Nom", |b: &Bank| b.name.clone()),
            ],
            true,
        )
    }

    #[test]
    fn test_amount_keys_keep_decimals() {
        assert!(SortKey::amount("12.10") < SortKey::amount("12.90"));
        assert_eq!(SortKey::amount("1 500,50"), SortKey::amount("1500.5"));
        assert!(SortKey::amount("n/a") < SortKey::amount("-3"));
    }

    #[test]
    fn test_sort_and_filter() {
        let items = vec![
            bank(10, "SGB", "Société Générale", "active", false),
            bank(2, "BOA", "Bank of Africa", "inactive", false),
            bank(7, "NSIA", "NSIA Banque", "active", false),
        ];
        let mut t = table();

        assert!(t.toggle_sort("id"));
        let ids: Vec<i64> = t.rows(&items).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 7, 10]);

        assert!(t.toggle_sort("id"));
        let ids: Vec<i64> = t.rows(&items).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 7, 2]);

        assert!(t.set_sort("code", SortDirection::Asc));
        let codes: Vec<&str> = t.rows(&items).iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["BOA", "NSIA", "SGB"]);

        assert!(!t.set_sort("unknown", SortDirection::Asc));

        t.set_filter("  banque ");
        assert_eq!(t.rows(&items).len(), 1);
        t.set_filter("inactif");
        assert_eq!(t.rows(&items)[0].code, "BOA");
        t.set_filter("");
        assert_eq!(t.rows(&items).len(), 3);
    }

    #[test]
    fn test_row_actions() {
        let t = table();
        assert_eq!(
            t.row_actions(&bank(1, "A", "A", "active", false)),
            vec![RowAction::View, RowAction::Edit, RowAction::Delete, RowAction::Disable]
        );
        assert_eq!(
            t.row_actions(&bank(1, "A", "A", "inactive", false)).last(),
            Some(&RowAction::Enable)
        );
        assert_eq!(t.row_actions(&bank(1, "A", "A", "active", true)), vec![RowAction::View]);

        let fixed = DataTable::new(vec![Column::new("code", "Code", |b: &Bank| b.code.clone())], false);
        assert_eq!(fixed.row_actions(&bank(1, "A", "A", "active", false)).len(), 3);
    }

    #[test]
    fn test_render_placeholders() {
        let t = table().with_empty_text("Aucune banque");
        assert!(t.render(&[], false, None).contains("Aucune banque"));
        assert!(t.render(&[], true, None).contains(LOADING_TEXT));

        let meta = PageMeta {
            current_page: 2,
            last_page: 3,
            per_page: 25,
            from: Some(26),
            to: Some(50),
            total: 60,
        };
        let out = t.render(&[bank(1, "BNP", "BNP Paribas", "active", false)], false, Some(&meta));
        assert!(out.contains("BNP Paribas"));
        assert!(out.contains("Page 2 / 3 (60 éléments)"));
        assert!(out.contains("‹ Précédent"));
        assert!(out.contains("Suivant ›"));
    }
}

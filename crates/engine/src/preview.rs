use data_loader::{CareRecord, DataSet, Interaction, Shoe, User};
use serde::Serialize;

pub const DEFAULT_ROWS: usize = 5;

/// Leading rows of every table, shoes as cleaned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub users: Vec<User>,
    pub shoes: Vec<Shoe>,
    pub interactions: Vec<Interaction>,
    pub care_history: Vec<CareRecord>,
}

fn head<T: Clone>(rows: &[T], n: usize) -> Vec<T> {
    rows.iter().take(n).cloned().collect()
}

pub fn build(data: &DataSet, shoes: &[Shoe], rows: usize) -> Preview {
    Preview {
        users: head(data.users(), rows),
        shoes: head(shoes, rows),
        interactions: head(data.interactions(), rows),
        care_history: head(data.care_history(), rows),
    }
}

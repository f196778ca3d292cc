//! The family-tree loader and printer.
//!
//! Reads a CSV file of `id,name,gender,parents,children` rows into a map of
//! people keyed by id. The `parents` and `children` columns are
//! comma-joined id lists inside a single, usually quoted, field.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::path::Path;

use crate::error::{Result, TrazoError};

/// One person in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique id within the tree.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form gender field from the CSV.
    pub gender: String,
    /// Ids of this person's parents.
    pub parents: Vec<String>,
    /// Ids of this person's children.
    pub children: Vec<String>,
}

/// A family tree keyed by person id.
#[derive(Debug, Default)]
pub struct FamilyTree {
    members: HashMap<String, Person>,
}

impl FamilyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a tree from a CSV file. The header line is skipped; rows need
    /// at least the five expected fields.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| TrazoError::file_open(path.to_path_buf(), e))?;

        let mut tree = Self::new();
        for (number, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_csv_line(line);
            if fields.len() < 5 {
                return Err(TrazoError::malformed_record(
                    number + 1,
                    format!("expected 5 fields, got {}", fields.len()),
                ));
            }

            tree.insert(Person {
                id: fields[0].clone(),
                name: fields[1].clone(),
                gender: fields[2].clone(),
                parents: split_ids(&fields[3]),
                children: split_ids(&fields[4]),
            });
        }

        tracing::info!("Loaded {} family members from {}", tree.len(), path.display());
        Ok(tree)
    }

    /// Add or replace a member.
    pub fn insert(&mut self, person: Person) {
        self.members.insert(person.id.clone(), person);
    }

    /// Look up a member by id.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.members.get(id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the tree has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members sorted by id.
    pub fn members_sorted(&self) -> Vec<&Person> {
        let mut members: Vec<&Person> = self.members.values().collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }
}

/// Append `person` as one CSV row to `path`.
pub fn append_csv(path: &Path, person: &Person) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| TrazoError::file_open(path.to_path_buf(), e))?;

    writeln!(file, "{}", format_csv_row(person))?;

    tracing::info!("Appended {} to {}", person.id, path.display());
    Ok(())
}

/// Print one line per member, sorted by id.
pub fn print_tree(out: &mut impl Write, tree: &FamilyTree) -> io::Result<()> {
    for person in tree.members_sorted() {
        writeln!(
            out,
            "ID: {} | Name: {} | Gender: {} | Parents: {:?} | Children: {:?}",
            person.id, person.name, person.gender, person.parents, person.children
        )?;
    }
    Ok(())
}

/// Split one CSV line, honoring double-quoted fields with embedded commas
/// and doubled quotes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            },
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn split_ids(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_csv_row(person: &Person) -> String {
    format!(
        "{},{},{},\"{}\",\"{}\"",
        person.id,
        person.name,
        person.gender,
        person.parents.join(","),
        person.children.join(",")
    )
}

pub mod json;

use crate::error::{Result, RubricError};
use crate::types::evaluation::{Evaluation, Professor, Student};

/// An entity kept in one of the seminar collections.
pub trait Record: Clone {
    const COLLECTION: &'static str;
    /// Whether `update`/`delete` are allowed once the record exists.
    const MUTABLE: bool = true;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

impl Record for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Professor {
    const COLLECTION: &'static str = "professors";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Evaluation {
    const COLLECTION: &'static str = "evaluations";
    const MUTABLE: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Storage port for one collection. Records added with an empty id get one
/// assigned by the store.
pub trait Store<R: Record> {
    fn get(&self, id: &str) -> Result<Option<R>>;
    fn list(&self) -> Result<Vec<R>>;
    fn add(&mut self, record: R) -> Result<R>;
    fn update(&mut self, record: R) -> Result<()>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// In-process store, insertion ordered.
#[derive(Debug, Clone)]
pub struct MemoryStore<R> {
    records: Vec<R>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> Store<R> for MemoryStore<R> {
    fn get(&self, id: &str) -> Result<Option<R>> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn add(&mut self, record: R) -> Result<R> {
        let record = insert_record(&mut self.records, record)?;
        Ok(record)
    }

    fn update(&mut self, record: R) -> Result<()> {
        replace_record(&mut self.records, record)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        remove_record(&mut self.records, id)
    }
}

// Shared collection semantics for every backend.

pub(crate) fn insert_record<R: Record>(records: &mut Vec<R>, mut record: R) -> Result<R> {
    if record.id().is_empty() {
        record.set_id(next_id(records));
    } else if records.iter().any(|existing| existing.id() == record.id()) {
        return Err(RubricError::DuplicateId(format!(
            "{}/{}",
            R::COLLECTION,
            record.id()
        )));
    }
    records.push(record.clone());
    Ok(record)
}

pub(crate) fn replace_record<R: Record>(records: &mut [R], record: R) -> Result<()> {
    if !R::MUTABLE {
        return Err(RubricError::ImmutableRecord(R::COLLECTION));
    }
    let slot = records
        .iter_mut()
        .find(|existing| existing.id() == record.id())
        .ok_or_else(|| RubricError::NotFound(format!("{}/{}", R::COLLECTION, record.id())))?;
    *slot = record;
    Ok(())
}

pub(crate) fn remove_record<R: Record>(records: &mut Vec<R>, id: &str) -> Result<()> {
    if !R::MUTABLE {
        return Err(RubricError::ImmutableRecord(R::COLLECTION));
    }
    let before = records.len();
    records.retain(|record| record.id() != id);
    if records.len() == before {
        return Err(RubricError::NotFound(format!("{}/{}", R::COLLECTION, id)));
    }
    Ok(())
}

fn next_id<R: Record>(records: &[R]) -> String {
    let mut n = records.len() + 1;
    loop {
        let candidate = n.to_string();
        if !records.iter().any(|record| record.id() == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Students the seminar starts with.
pub fn seed_students() -> Vec<Student> {
    [
        ("Ana García", "A01234567"),
        ("Carlos Rodríguez", "A01234568"),
        ("Beatriz López", "A01234569"),
        ("David Martínez", "A01234570"),
        ("Elena Gómez", "A01234571"),
    ]
    .into_iter()
    .map(|(name, student_id)| Student {
        id: String::new(),
        name: name.to_string(),
        student_id: student_id.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::semester::Semester;

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            student_id: format!("A{name}"),
        }
    }

    fn evaluation(id: &str) -> Evaluation {
        Evaluation {
            id: id.to_string(),
            student_name: "Ana García".to_string(),
            semester: Semester::First,
            evaluator: "Dr. Smith".to_string(),
            date: "2024-05-15".to_string(),
            scores: Default::default(),
            overall_score: 0.0,
            professor_prompt: None,
            ai_comments: None,
        }
    }

    #[test]
    fn add_assigns_ids_and_preserves_order() {
        let mut store = MemoryStore::new();
        let first = store.add(student("", "Ana")).expect("add should work");
        let second = store.add(student("", "Carlos")).expect("add should work");
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        let names = store
            .list()
            .expect("list should work")
            .into_iter()
            .map(|student| student.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Ana", "Carlos"]);
    }

    #[test]
    fn generated_ids_skip_taken_values() {
        let mut store = MemoryStore::with_records(vec![student("2", "Taken")]);
        let added = store.add(student("", "New")).expect("add should work");
        assert_eq!(added.id, "3");
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut store = MemoryStore::new();
        store.add(student("s1", "Ana")).expect("add should work");
        let err = store
            .add(student("s1", "Other"))
            .expect_err("duplicate should fail");
        assert!(matches!(err, RubricError::DuplicateId(ref id) if id == "students/s1"));
    }

    #[test]
    fn update_and_delete_mutable_records() {
        let mut store = MemoryStore::new();
        store.add(student("s1", "Ana")).expect("add should work");
        store
            .update(student("s1", "Ana María"))
            .expect("update should work");
        assert_eq!(
            store
                .get("s1")
                .expect("get should work")
                .map(|student| student.name),
            Some("Ana María".to_string())
        );
        store.delete("s1").expect("delete should work");
        assert!(store.get("s1").expect("get should work").is_none());
        assert!(matches!(store.delete("s1"), Err(RubricError::NotFound(_))));
        assert!(matches!(
            store.update(student("missing", "x")),
            Err(RubricError::NotFound(_))
        ));
    }

    #[test]
    fn evaluations_are_immutable() {
        let mut store = MemoryStore::new();
        store.add(evaluation("e1")).expect("add should work");
        let mut changed = evaluation("e1");
        changed.overall_score = 10.0;
        assert!(matches!(
            store.update(changed),
            Err(RubricError::ImmutableRecord("evaluations"))
        ));
        assert!(matches!(
            store.delete("e1"),
            Err(RubricError::ImmutableRecord("evaluations"))
        ));
        assert_eq!(store.list().expect("list should work").len(), 1);
    }

    #[test]
    fn professors_use_their_own_collection() {
        let mut store = MemoryStore::new();
        let added = store
            .add(Professor {
                id: String::new(),
                name: "Dr. Smith".to_string(),
                email: "smith@example.edu".to_string(),
                admin: false,
            })
            .expect("add should work");
        assert_eq!(added.id, "1");
        assert_eq!(<Professor as Record>::COLLECTION, "professors");
    }

    #[test]
    fn seed_students_have_unique_student_ids() {
        let seeds = seed_students();
        assert_eq!(seeds.len(), 5);
        let mut ids = seeds
            .iter()
            .map(|student| student.student_id.as_str())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}

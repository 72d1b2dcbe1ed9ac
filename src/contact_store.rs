use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Person, PersonId};
use crate::errors::AppError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressBookError {
    #[error("person id space exhausted")]
    IdSpaceExhausted,
}

impl From<AddressBookError> for AppError {
    fn from(err: AddressBookError) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Ordered collection of people plus the id counter.
///
/// `next_id` only ever grows, so an id is never handed out twice even after
/// the person holding it has been removed. Only `reset` rewinds it.
#[derive(Debug)]
pub struct AddressBook {
    people: Vec<Person>,
    next_id: PersonId,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) -> Result<Person, AddressBookError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(AddressBookError::IdSpaceExhausted)?;

        let person = Person {
            id,
            name: name.into(),
        };
        self.people.push(person.clone());
        Ok(person)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn rename(&mut self, id: PersonId, name: impl Into<String>) -> Option<&Person> {
        let person = self.people.iter_mut().find(|person| person.id == id)?;
        person.name = name.into();
        Some(person)
    }

    pub fn remove(&mut self, id: PersonId) -> Option<Person> {
        let index = self.people.iter().position(|person| person.id == id)?;
        Some(self.people.remove(index))
    }

    pub fn next_id(&self) -> PersonId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn reset(&mut self) {
        self.people.clear();
        self.next_id = 1;
    }
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, AppError>;
    async fn create(&self, name: String) -> Result<Person, AppError>;
    async fn get(&self, id: PersonId) -> Result<Person, AppError>;
    async fn rename(&self, id: PersonId, name: String) -> Result<Person, AppError>;
    async fn remove(&self, id: PersonId) -> Result<Person, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    book: RwLock<AddressBook>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct insertion, bypassing HTTP. Consumes an id like a POST does.
    pub async fn insert(&self, name: impl Into<String>) -> Result<Person, AppError> {
        Ok(self.book.write().await.insert(name)?)
    }

    pub async fn next_id(&self) -> PersonId {
        self.book.read().await.next_id()
    }

    pub async fn reset(&self) {
        self.book.write().await.reset();
        debug!("address book reset");
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.book.read().await.people().to_vec())
    }

    async fn create(&self, name: String) -> Result<Person, AppError> {
        let person = self.book.write().await.insert(name)?;
        debug!(person_id = person.id, "person created");
        Ok(person)
    }

    async fn get(&self, id: PersonId) -> Result<Person, AppError> {
        self.book
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::person_not_found(id))
    }

    async fn rename(&self, id: PersonId, name: String) -> Result<Person, AppError> {
        let mut book = self.book.write().await;
        let person = book
            .rename(id, name)
            .cloned()
            .ok_or_else(|| AppError::person_not_found(id))?;
        debug!(person_id = id, "person renamed");
        Ok(person)
    }

    async fn remove(&self, id: PersonId) -> Result<Person, AppError> {
        let person = self
            .book
            .write()
            .await
            .remove(id)
            .ok_or_else(|| AppError::person_not_found(id))?;
        debug!(person_id = id, "person removed");
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_ids_in_order() {
        let mut book = AddressBook::new();
        let first = book.insert("Juan").expect("insert");
        let second = book.insert("Ana").expect("insert");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(book.next_id(), 3);
        let names: Vec<&str> = book.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Juan", "Ana"]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut book = AddressBook::new();
        book.insert("Juan").expect("insert");
        let second = book.insert("Ana").expect("insert");

        assert_eq!(book.remove(second.id).map(|p| p.name), Some("Ana".to_string()));
        let third = book.insert("Luis").expect("insert");
        assert_eq!(third.id, 3);
        assert!(book.get(2).is_none());
    }

    #[test]
    fn rename_keeps_id_and_position() {
        let mut book = AddressBook::new();
        book.insert("Juan").expect("insert");
        book.insert("Ana").expect("insert");

        let renamed = book.rename(1, "Juana").cloned().expect("person exists");
        assert_eq!(renamed, Person { id: 1, name: "Juana".to_string() });
        assert_eq!(book.people()[0].name, "Juana");
        assert_eq!(book.next_id(), 3);
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut book = AddressBook::new();
        assert!(book.get(1).is_none());
        assert!(book.rename(1, "x").is_none());
        assert!(book.remove(1).is_none());
        assert!(book.is_empty());
        assert_eq!(book.next_id(), 1);
    }

    #[test]
    fn reset_clears_people_and_counter() {
        let mut book = AddressBook::new();
        book.insert("Juan").expect("insert");
        book.insert("Ana").expect("insert");
        book.reset();

        assert_eq!(book.len(), 0);
        assert_eq!(book.next_id(), 1);
        assert_eq!(book.insert("Luis").expect("insert").id, 1);
    }

    #[test]
    fn exhausted_counter_refuses_to_wrap() {
        let mut book = AddressBook {
            people: Vec::new(),
            next_id: PersonId::MAX,
        };

        assert_eq!(book.insert("Juan"), Err(AddressBookError::IdSpaceExhausted));
        assert!(book.is_empty());
        assert_eq!(book.next_id(), PersonId::MAX);
    }

    #[tokio::test]
    async fn store_maps_missing_ids_to_not_found() {
        let store = InMemoryContactStore::new();

        assert!(matches!(store.get(5).await, Err(AppError::NotFound { .. })));
        assert!(matches!(
            store.rename(5, "x".to_string()).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(store.remove(5).await, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn direct_insert_shares_counter_with_create() {
        let store = InMemoryContactStore::new();
        let inserted = store.insert("Juan").await.expect("insert");
        let created = store.create("Ana".to_string()).await.expect("create");

        assert_eq!(inserted.id, 1);
        assert_eq!(created.id, 2);
        assert_eq!(store.next_id().await, 3);
        assert_eq!(store.list().await.expect("list").len(), 2);

        store.reset().await;
        assert_eq!(store.next_id().await, 1);
        assert!(store.list().await.expect("list").is_empty());
    }
}

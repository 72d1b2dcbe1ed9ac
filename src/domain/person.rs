use serde::{Deserialize, Serialize};

pub type PersonId = u64;

pub const CONTACTS_PATH: &str = "/contacts";
pub const PERSON_PATH: &str = "/contacts/person";

/// A stored address-book entry. The resource URI is derived on the way out
/// and never kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

/// Request body accepted by `POST /contacts` and `PUT /contacts/person/{id}`.
///
/// Only `name` is read. Any `id` or `href` sent by the client is dropped
/// during deserialization, so ids stay server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonPayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResource {
    pub id: PersonId,
    pub name: String,
    pub href: String,
}

impl PersonResource {
    pub fn from_person(person: Person, base_url: &str) -> Self {
        Self {
            href: person_href(base_url, person.id),
            id: person.id,
            name: person.name,
        }
    }
}

pub fn person_href(base_url: &str, id: PersonId) -> String {
    format!("{base_url}{PERSON_PATH}/{id}")
}

/// Parses the `{id}` path segment. Anything that is not a positive integer
/// cannot name a person.
pub fn parse_person_id(raw: &str) -> Option<PersonId> {
    raw.parse::<PersonId>().ok().filter(|id| *id > 0)
}

use shared_models::{Appointment, AppointmentRequest, Doctor, Patient};

/// A row that carries its own store-assigned identity.
pub trait Record: Clone {
    fn id(&self) -> u64;
}

impl Record for Patient {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Doctor {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AppointmentRequest {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Appointment {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Append-only collection. Rows keep insertion order and ids are strictly
/// increasing, so lookups can binary search on the id.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next insert will receive. Ids are never handed out twice.
    pub fn next_id(&self) -> u64 {
        self.last_id + 1
    }

    /// Assigns the next id, builds the row with it and appends it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let id = self.next_id();
        let row = build(id);
        debug_assert_eq!(row.id(), id, "row must keep the id it was built with");

        self.last_id = id;
        self.rows.push(row.clone());
        row
    }

    pub fn find(&self, id: u64) -> Option<&T> {
        self.position(id).map(|idx| &self.rows[idx])
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut T> {
        self.position(id).map(move |idx| &mut self.rows[idx])
    }

    pub fn find_first<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().find(|row| predicate(*row))
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().any(predicate)
    }

    /// Matching rows, cloned, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| predicate(*row)).cloned().collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.rows.binary_search_by_key(&id, |row| row.id()).ok()
    }
}

use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // appends an entity, returning the number of records written
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // all entities in insertion order
    fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // number of stored entities
    fn count(&self) -> usize;
}

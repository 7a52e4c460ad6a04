use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .map(|x| x.downcast_ref().unwrap())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_insert() {
        let mut map = TypeMap::default();
        assert_eq!(map.get::<u32>(), None);

        map.insert(42u32);
        map.insert("hello");
        assert_eq!(map.get::<u32>(), Some(&42));
        assert_eq!(map.get::<&str>(), Some(&"hello"));

        map.insert(7u32);
        assert_eq!(map.get::<u32>(), Some(&7));
    }
}

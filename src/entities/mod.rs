pub mod fruit;

pub use fruit::Entity as Fruit;

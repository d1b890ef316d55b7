//! `SeaORM` entity definitions.

pub mod expenses;
pub mod income;

pub mod prelude {
    //! Entity re-exports.

    pub use super::expenses::Entity as Expenses;
    pub use super::income::Entity as Income;
}

//! Address projection from flat person fields.

use crate::model::address::Address;
use crate::model::person::Person;

/// Builds the structured address view of `person`.
pub fn compose_address(person: &Person) -> Address {
    Address {
        street: person.street.clone(),
        city: person.city.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::compose_address;
    use crate::model::person::Person;

    #[test]
    fn copies_street_and_city_only() {
        let person = Person::new(
            "Juan Pablo",
            Some("999-1231543".to_string()),
            "Caimito Street",
            "Imus",
        );

        let address = compose_address(&person);

        assert_eq!(address.street, "Caimito Street");
        assert_eq!(address.city, "Imus");
    }
}

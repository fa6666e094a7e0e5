use phonebook_core::{AddPersonRequest, DirectoryService, InMemoryPersonStore};
use std::sync::{Arc, Barrier};
use std::thread;

const WRITERS: usize = 8;

fn request(name: &str, phone: String) -> AddPersonRequest {
    AddPersonRequest {
        name: name.to_string(),
        phone: Some(phone),
        street: "Race Street".to_string(),
        city: "Taguig".to_string(),
    }
}

#[test]
fn concurrent_adds_with_same_name_admit_exactly_one() {
    let service = Arc::new(DirectoryService::new(InMemoryPersonStore::new()));
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|index| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                service.add(request("Contested", format!("555-{index:04}")))
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(service.count(), 1);
}

#[test]
fn concurrent_adds_with_distinct_names_all_land() {
    let service = Arc::new(DirectoryService::new(InMemoryPersonStore::new()));

    let handles: Vec<_> = (0..WRITERS)
        .map(|index| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service
                    .add(request(&format!("Writer {index}"), "555-0000".to_string()))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(service.count(), WRITERS);
}

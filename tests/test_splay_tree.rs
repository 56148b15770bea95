use rand::{thread_rng, Rng};
use splay_collections::{Error, SplayTree};

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_splay_tree() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = SplayTree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, NUM_OF_OPERATIONS as u32 * 2);
        let val = rng.gen::<u32>();

        match tree.insert(key, val) {
            Ok(()) => {
                assert_eq!(tree.root_key(), Some(&key));
                expected.push((key, val));
            },
            Err(err) => assert_eq!(err, Error::DuplicateKey),
        }
    }

    expected.sort();

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.minimum_key(), Ok(&expected[0].0));
    assert_eq!(tree.maximum_key(), Ok(&expected[expected.len() - 1].0));

    for entry in &expected {
        assert_eq!(tree.peek(&entry.0), Ok(&entry.1));
        assert_eq!(tree.root_key(), Some(&entry.0));
    }

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for entry in expected {
        assert_eq!(tree.extract(&entry.0), Ok(entry.1));
        assert!(!tree.contains_key(&entry.0));
        expected_len -= 1;
        assert_eq!(tree.len(), expected_len);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.minimum_key(), Err(Error::EmptyTree));
}

#[test]
fn int_test_round_trip() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut tree = SplayTree::new();
    for key in 0..1_000u32 {
        tree.insert(key * 2, key.to_string()).unwrap();
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000u32) * 2 + 1;
        let len = tree.len();
        tree.insert(key, String::from("round trip")).unwrap();
        assert_eq!(tree.extract(&key), Ok(String::from("round trip")));
        assert_eq!(tree.len(), len);
    }
}

#[test]
fn int_test_sequential_access() {
    let mut tree = SplayTree::new();
    for key in 0..NUM_OF_OPERATIONS {
        tree.insert(key, key).unwrap();
    }
    for key in 0..NUM_OF_OPERATIONS {
        assert_eq!(tree.peek(&key), Ok(&key));
    }
    for key in (0..NUM_OF_OPERATIONS).rev() {
        assert_eq!(tree.maximum_key(), Ok(&key));
        assert_eq!(tree.extract(&key), Ok(key));
    }
    assert!(tree.is_empty());
}

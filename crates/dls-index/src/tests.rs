//! Unit tests for dls-index collections.

#[cfg(test)]
mod avl {
    use crate::avl::{AvlMap, Branch};

    #[test]
    fn empty_map() {
        let map: AvlMap<String, u64> = AvlMap::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert!(map.inorder().is_empty());
        assert!(map.get(&"x".to_string()).is_none());
    }

    #[test]
    fn insert_and_get() {
        let mut map = AvlMap::new();
        map.insert("0→1→2".to_string(), 1u64);
        map.insert("0→3".to_string(), 4);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"0→1→2".to_string()), Some(&1));
        assert_eq!(map.get(&"0→3".to_string()), Some(&4));
        assert!(map.get(&"0→2".to_string()).is_none());
    }

    #[test]
    fn overwrite_keeps_shape() {
        let mut map = AvlMap::new();
        for k in ["m", "d", "t", "b", "f"] {
            map.insert(k.to_string(), 1u64);
        }
        let edges_before = map.export_edges();
        let height_before = map.height();

        // Second insert of an existing key: value replaced, nothing moves.
        map.insert("d".to_string(), 99);
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(&"d".to_string()), Some(&99));
        assert_eq!(map.export_edges(), edges_before);
        assert_eq!(map.height(), height_before);
    }

    #[test]
    fn balanced_after_every_insert() {
        // Keys chosen to hit all four rotation cases as the tree grows.
        let keys = [
            "10", "20", "30", // RR
            "05", "03",       // LL
            "08", "07",       // LR
            "25", "27",       // RL
            "01", "02", "40", "35", "15", "12",
        ];
        let mut map = AvlMap::new();
        for (i, k) in keys.iter().enumerate() {
            map.insert(k.to_string(), i as u64);
            assert!(map.is_balanced(), "unbalanced after inserting {k}");
        }
        assert_eq!(map.len(), keys.len());

        let inorder = map.inorder();
        for pair in inorder.windows(2) {
            assert!(pair[0].0 < pair[1].0, "inorder keys must strictly increase");
        }
    }

    #[test]
    fn ascending_inserts_stay_logarithmic() {
        // Worst case for an unbalanced BST; AVL must keep height ~log2(n).
        let mut map = AvlMap::new();
        for i in 0..128u32 {
            map.insert(format!("{i:04}"), i as u64);
        }
        assert!(map.is_balanced());
        // Perfectly balanced would be 8; AVL guarantees < 1.44 * log2(n).
        assert!(map.height() <= 10, "height {} too large for 128 keys", map.height());
    }

    #[test]
    fn b_a_c_d_single_rotationless_shape() {
        // "B","A","C" insert cleanly; "D" extends the right spine without
        // breaking balance.  Root stays "B" with both children present.
        let mut map = AvlMap::new();
        for k in ["B", "A", "C", "D"] {
            map.insert(k.to_string(), 1u64);
        }
        assert!(map.is_balanced());

        let edges = map.export_edges();
        assert!(edges.contains(&("B".to_string(), "A".to_string(), Branch::Left)));
        assert!(edges.contains(&("B".to_string(), "C".to_string(), Branch::Right)));
        assert!(edges.contains(&("C".to_string(), "D".to_string(), Branch::Right)));
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn increment_on_search() {
        let mut map = AvlMap::new();
        let sig = "0→1→2".to_string();
        match map.get_mut(&sig) {
            Some(count) => *count += 1,
            None => map.insert(sig.clone(), 1u64),
        }
        match map.get_mut(&sig) {
            Some(count) => *count += 1,
            None => map.insert(sig.clone(), 1u64),
        }
        assert_eq!(map.get(&sig), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn export_edges_tags_sides() {
        let mut map = AvlMap::new();
        map.insert("b", 0u64);
        map.insert("a", 0);
        map.insert("c", 0);
        let edges = map.export_edges();
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&("b", "a", Branch::Left)));
        assert!(edges.contains(&("b", "c", Branch::Right)));
        assert_eq!(Branch::Left.as_str(), "L");
        assert_eq!(Branch::Right.as_str(), "R");
    }
}

#[cfg(test)]
mod store {
    use crate::store::KeyedStore;

    #[test]
    fn empty_store() {
        let store: KeyedStore<u32, String> = KeyedStore::new();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 1024);
        assert!(store.get(7).is_none());
        assert!(!store.exists(7));
    }

    #[test]
    fn put_get_roundtrip() {
        let mut store = KeyedStore::new();
        store.put(1u32, "one");
        store.put(2, "two");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&"one"));
        assert_eq!(store.get(2), Some(&"two"));
        assert!(store.exists(1));
        assert!(!store.exists(3));
    }

    #[test]
    fn overwrite_does_not_duplicate() {
        let mut store = KeyedStore::new();
        store.put(5u32, 100);
        store.put(5, 200);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(5), Some(&200));
        assert_eq!(store.keys(), vec![5]);
    }

    #[test]
    fn single_bucket_chains_correctly() {
        // Capacity 1 forces every key into the same chain.
        let mut store = KeyedStore::with_capacity(1);
        for k in 0u32..20 {
            store.put(k, k * 10);
        }
        assert_eq!(store.len(), 20);
        for k in 0u32..20 {
            assert_eq!(store.get(k), Some(&(k * 10)));
        }
        // Overwrite mid-chain.
        store.put(10, 9999);
        assert_eq!(store.len(), 20);
        assert_eq!(store.get(10), Some(&9999));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut store = KeyedStore::new();
        store.put(3u32, 1);
        if let Some(v) = store.get_mut(3) {
            *v += 41;
        }
        assert_eq!(store.get(3), Some(&42));
    }

    #[test]
    fn keys_enumerates_all() {
        let mut store = KeyedStore::with_capacity(8);
        for k in 0u32..50 {
            store.put(k, ());
        }
        let mut keys = store.keys();
        keys.sort_unstable();
        assert_eq!(keys, (0u32..50).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _ = KeyedStore::<u32, ()>::with_capacity(0);
    }
}

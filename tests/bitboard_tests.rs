use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })
    ));
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(bb.contains(1, 1));
    assert!(!bb.contains(2, 2));

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(bb.get(0, 4).is_err());
    assert!(!bb.contains(0, 4));
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_full_and_iter() {
    let mut bb = BitBoard::<u16, 3>::new();
    for r in 0..3 {
        for c in 0..3 {
            assert!(!bb.is_full());
            bb.set(r, c).unwrap();
        }
    }
    assert!(bb.is_full());
    assert_eq!(bb.iter().count(), 9);

    let mut sparse = BitBoard::<u16, 4>::new();
    sparse.set(3, 3).unwrap();
    sparse.set(0, 1).unwrap();
    let bits: Vec<_> = sparse.iter().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_set_operations() {
    let mut a = BitBoard::<u32, 5>::new();
    let mut b = BitBoard::<u32, 5>::new();
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    b.set(1, 1).unwrap();
    b.set(4, 4).unwrap();

    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!((a | b).count_ones(), 3);
    a |= b;
    assert_eq!(a, a | b);
    assert_eq!(format!("{:?}", b), "BitBoard<5x5> [(1, 1), (4, 4)]");
}

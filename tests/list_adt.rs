use chunky_list::{
    ChunkyArrayList, FixedSizeList, GrowableList, ListAdt, ListError, SinglyLinkedList,
};

fn contents<L: ListAdt<Item = i32>>(list: &L) -> Vec<i32> {
    (0..list.len()).map(|i| *list.get(i).unwrap()).collect()
}

fn exercise<L: ListAdt<Item = i32>>(mut sut: L) {
    assert!(sut.is_empty());
    assert_eq!(sut.front(), Err(ListError::EmptyCollection));
    assert_eq!(sut.back(), Err(ListError::EmptyCollection));
    assert_eq!(sut.get(0), Err(ListError::EmptyCollection));
    assert_eq!(sut.remove(0), Err(ListError::EmptyCollection));
    assert_eq!(sut.pop_front(), Err(ListError::EmptyCollection));
    assert_eq!(sut.pop_back(), Err(ListError::EmptyCollection));
    assert_eq!(
        sut.insert(1, 0),
        Err(ListError::IndexOutOfRange { index: 1, len: 0 })
    );

    sut.push_back(3).unwrap();
    sut.push_front(1).unwrap();
    sut.insert(1, 2).unwrap();
    sut.insert(3, 5).unwrap();
    sut.insert(3, 4).unwrap();
    assert_eq!(contents(&sut), [1, 2, 3, 4, 5]);
    assert_eq!(sut.len(), 5);

    assert_eq!(sut.front(), Ok(&1));
    assert_eq!(sut.back(), Ok(&5));
    assert_eq!(
        sut.get(5),
        Err(ListError::IndexOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(
        sut.insert(7, 0),
        Err(ListError::IndexOutOfRange { index: 7, len: 5 })
    );

    assert_eq!(sut.set(2, 30), Ok(3));
    *sut.get_mut(0).unwrap() = 10;
    assert_eq!(contents(&sut), [10, 2, 30, 4, 5]);

    assert_eq!(sut.remove(2), Ok(30));
    assert_eq!(sut.pop_front(), Ok(10));
    assert_eq!(sut.pop_back(), Ok(5));
    assert_eq!(contents(&sut), [2, 4]);
    assert_eq!(
        sut.remove(2),
        Err(ListError::IndexOutOfRange { index: 2, len: 2 })
    );

    assert_eq!(sut.pop_back(), Ok(4));
    assert_eq!(sut.pop_back(), Ok(2));
    assert!(sut.is_empty());
}

#[test]
fn test_singly_linked_list_satisfies_list_adt() {
    exercise(SinglyLinkedList::new());
}

#[test]
fn test_fixed_size_list_satisfies_list_adt() {
    exercise(FixedSizeList::new(8));
}

#[test]
fn test_growable_list_satisfies_list_adt() {
    exercise(GrowableList::new());
}

#[test]
fn test_chunky_array_list_satisfies_list_adt() {
    for chunk_size in [1, 2, 3, 4, 16] {
        exercise(ChunkyArrayList::new(chunk_size).unwrap());
    }
}

#[test]
fn test_fixed_size_list_reports_capacity_through_list_adt() {
    let mut sut = FixedSizeList::new(2);
    ListAdt::push_back(&mut sut, 1).unwrap();
    ListAdt::push_back(&mut sut, 2).unwrap();

    assert_eq!(
        ListAdt::push_back(&mut sut, 3),
        Err(ListError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(
        ListAdt::insert(&mut sut, 5, 3),
        Err(ListError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(contents(&sut), [1, 2]);
}

#[test]
fn test_all_lists_agree_on_a_long_sequence() {
    fn run<L: ListAdt<Item = i32>>(mut sut: L) -> Vec<i32> {
        for i in 0..100 {
            let index = (i as usize * 7) % (sut.len() + 1);
            sut.insert(index, i).unwrap();
        }
        for i in 0..40 {
            let index = (i * 11) % sut.len();
            sut.remove(index).unwrap();
        }
        contents(&sut)
    }

    let expected = run(GrowableList::new());
    assert_eq!(expected.len(), 60);
    assert_eq!(run(SinglyLinkedList::new()), expected);
    assert_eq!(run(FixedSizeList::new(100)), expected);
    for chunk_size in [1, 2, 5, 16, 64] {
        assert_eq!(run(ChunkyArrayList::new(chunk_size).unwrap()), expected);
    }
}

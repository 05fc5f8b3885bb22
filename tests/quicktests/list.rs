use classic_collections::list::LinkedList;

use crate::Op;

quickcheck::quickcheck! {
    fn behaves_like_vec(ops: Vec<Op<u8>>) -> bool {
        let mut list = LinkedList::new();
        let mut vec = Vec::new();

        for op in ops {
            match op {
                // Use the value to pick a position too so inserts land all over the list.
                Op::Insert(x) => {
                    let pos = usize::from(x) % (vec.len() + 1);
                    vec.insert(pos, x);
                    if list.insert(pos, x).is_err() {
                        return false;
                    }
                }
                Op::Remove(x) => {
                    let expected = vec.iter().position(|y| *y == x).map(|pos| vec.remove(pos));
                    if list.remove(&x) != expected.is_some() {
                        return false;
                    }
                }
            }
        }

        list.len() == vec.len() && list.iter().eq(vec.iter()) && list.iter().rev().eq(vec.iter().rev())
    }
}

quickcheck::quickcheck! {
    fn sub_list_and_remove_range_agree(xs: Vec<u8>, a: usize, b: usize) -> bool {
        let mut list: LinkedList<_> = xs.iter().copied().collect();
        let (start, stop) = {
            let a = a % (xs.len() + 1);
            let b = b % (xs.len() + 1);
            (a.min(b), a.max(b))
        };

        let sub_list = match list.sub_list(start, stop) {
            Ok(sub_list) => sub_list,
            Err(_) => return false,
        };
        if list.remove_range(start, stop).is_err() {
            return false;
        }

        let mut rest = xs.clone();
        let removed: Vec<_> = rest.drain(start..stop).collect();

        sub_list.iter().eq(removed.iter()) && list.iter().eq(rest.iter())
    }
}

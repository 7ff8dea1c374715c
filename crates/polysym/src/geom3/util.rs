//! Small utilities: k-combinations and numeric helpers.

/// k-combinations of items (lexicographic).
pub(crate) fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn rec<T: Copy>(items: &[T], k: usize, start: usize, cur: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..items.len() {
            // Not enough items left to fill the combination.
            if items.len() - i < k - cur.len() {
                break;
            }
            cur.push(items[i]);
            rec(items, k, i + 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    if k == 0 || k > items.len() {
        return out;
    }
    let mut cur = Vec::with_capacity(k);
    rec(items, k, 0, &mut cur, &mut out);
    out
}

pub(crate) fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Divisors of `n` that are `>= min`, largest first.
pub(crate) fn divisors_desc(n: u32, min: u32) -> Vec<u32> {
    (min.max(1)..=n).rev().filter(|d| n % d == 0).collect()
}

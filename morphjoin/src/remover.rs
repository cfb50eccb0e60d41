//! 位置またはキーを指定した要素の削除
//!
//! [`std::ops::Index`]による取り出しの逆で、指定した位置の要素を取り除いた残りを
//! 元の順序のまま返します。キー付きのマップ、要素の列、文字列の3種類を
//! それぞれ別の関数で扱います。

use std::hash::{BuildHasher, Hash};

use hashbrown::{HashMap, HashSet};

use crate::errors::{MorphjoinError, Result};

/// 指定したキーを取り除いたマップを返します。
///
/// # 引数
///
/// * `map` - 元のマップ
/// * `keys` - 取り除くキー
pub fn remove_keys<K, V, S>(map: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut out = HashMap::with_capacity_and_hasher(map.len(), map.hasher().clone());
    for (k, v) in map {
        if !keys.contains(k) {
            out.insert(k.clone(), v.clone());
        }
    }
    out
}

/// 指定した位置の要素を取り除いた列を返します。
///
/// 残った要素の相対的な順序は保たれます。範囲外の位置は無視されます。
///
/// # 引数
///
/// * `items` - 元の列
/// * `indices` - 取り除く0始まりの位置
///
/// # 例
///
/// ```
/// use morphjoin::remover::remove_indices;
///
/// assert_eq!(vec!['a', 'c'], remove_indices(&['a', 'b', 'c', 'd'], &[1, 3]));
/// ```
pub fn remove_indices<T>(items: &[T], indices: &[usize]) -> Vec<T>
where
    T: Clone,
{
    if indices.is_empty() {
        return items.to_vec();
    }
    let targets: HashSet<usize> = indices.iter().copied().collect();
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| !targets.contains(i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// [`remove_indices`]の所有権を受け取る版です。
///
/// 要素を複製せずに取り除くため、形態素列の一括削除に使います。
pub fn retain_except<T>(items: &mut Vec<T>, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }
    let targets: HashSet<usize> = indices.iter().copied().collect();
    let mut i = 0;
    items.retain(|_| {
        let keep = !targets.contains(&i);
        i += 1;
        keep
    });
}

/// 指定した文字位置の文字を取り除いた文字列を返します。
///
/// 位置はバイトではなく文字単位で数えます。
pub fn remove_char_indices(text: &str, indices: &[usize]) -> String {
    if indices.is_empty() {
        return text.to_string();
    }
    let targets: HashSet<usize> = indices.iter().copied().collect();
    text.chars()
        .enumerate()
        .filter(|(i, _)| !targets.contains(i))
        .map(|(_, c)| c)
        .collect()
}

/// 1つの位置の要素を取り除きます。後ろの要素は前に詰められます。
///
/// # エラー
///
/// `index` が範囲外の場合、[`MorphjoinError`]が返されます。
pub fn remove_index<T>(items: &[T], index: usize) -> Result<Vec<T>>
where
    T: Clone,
{
    if index >= items.len() {
        return Err(MorphjoinError::invalid_argument(
            "index",
            format!("{index} is out of range for length {}", items.len()),
        ));
    }
    let mut out = items.to_vec();
    out.remove(index);
    Ok(out)
}

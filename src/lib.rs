// 链表的应用场景很偏门：
// 需要频繁拆分重组
// 数量频繁变动
// 理论上数量无限而且实际上数量很大
// 元素很大，否则一个节点光是链接（一两个usize的大小）都比本体大了
// 函数式编程，链表天然适合迭代器

// 循环链表多一个场景：轮转（round-robin），走到尾自动回到头

pub mod circular;
pub mod error;

pub use circular::{ CircularList, Iter, Removal };
pub use error::RingError;

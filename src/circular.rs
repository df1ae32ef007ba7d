// 循环单链表
// 只存一个尾指针，头永远是尾的下一个，所以头尾插入都是O(1)

// 为什么不用Box？
// 环上每个节点都被前驱拥有，最后一个节点又指回第一个，所有权成环了
// Box做不到，Rc<RefCell>能做但要处理循环引用泄漏（见双链表那章的Weak），裸指针又回到unsafe
// 这里换个思路：节点全放进一个Vec（arena），链接就是下标
// 删除时把槽位清空并记进空闲表，下次插入优先复用

// 遍历一律用计数器限步，不靠“回到起点”的指针比较
// 这样就算哪里把环接坏了，也只会少走或错走，不会死循环
use std::fmt::{ self, Debug, Display };

use tracing::{ debug, trace };

use crate::error::RingError;

// 指向尾节点的下标，None就是空环
type Link = Option<usize>;

struct Node {
    elem: i64,
    next: usize,
}

pub struct CircularList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    tail: Link,
    len: usize,
}

/// Which link surgery `delete_by_value` performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The ring held a single node and is now empty.
    Only,
    /// The head was unlinked; the tail now points past it.
    Head,
    /// The tail was unlinked; its predecessor became the new tail.
    Tail,
    /// A node strictly between head and tail was unlinked.
    Interior,
}

pub struct Iter<'a> {
    list: &'a CircularList,
    next: Link,
    len: usize,
}

impl CircularList {
    pub fn new() -> Self {
        CircularList {
            slots: Vec::new(),
            free: Vec::new(),
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // 下标都是环自己发出去的，指到空槽只可能是实现写错了
    fn node(&self, idx: usize) -> &Node {
        self.slots[idx].as_ref().expect("ring link points at a vacant slot")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx].as_mut().expect("ring link points at a vacant slot")
    }

    // 新节点先自环，由调用者接进环里
    fn alloc(&mut self, elem: i64) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(Node { elem, next: idx });
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Some(Node { elem, next: idx }));
                idx
            }
        }
    }

    fn release(&mut self, idx: usize) -> i64 {
        let node = self.slots[idx].take().expect("released a vacant slot");
        self.free.push(idx);
        node.elem
    }

    // 头插和尾插的链接手术是一样的：都接在尾和头之间
    // 区别只在于尾插之后尾指针要挪到新节点上
    fn link_after_tail(&mut self, elem: i64) -> usize {
        let new = self.alloc(elem);
        match self.tail {
            Some(tail) => {
                let head = self.node(tail).next;
                self.node_mut(new).next = head;
                self.node_mut(tail).next = new;
            }
            None => {
                self.tail = Some(new);
            }
        }
        self.len += 1;
        new
    }

    pub fn insert_at_head(&mut self, elem: i64) {
        self.link_after_tail(elem);
        trace!(value = elem, len = self.len, "inserted at head");
    }

    pub fn insert_at_tail(&mut self, elem: i64) {
        let new = self.link_after_tail(elem);
        self.tail = Some(new);
        trace!(value = elem, len = self.len, "inserted at tail");
    }

    /// Unlinks the head and returns its value.
    ///
    /// Fails with [`RingError::EmptyCollection`] on an empty ring, leaving it untouched.
    pub fn delete_at_head(&mut self) -> Result<i64, RingError> {
        let Some(tail) = self.tail else {
            debug!("delete at head on an empty ring");
            return Err(RingError::EmptyCollection);
        };

        let head = self.node(tail).next;
        if self.len == 1 {
            self.tail = None;
        } else {
            let after = self.node(head).next;
            self.node_mut(tail).next = after;
        }
        self.len -= 1;

        let elem = self.release(head);
        trace!(value = elem, len = self.len, "deleted from head");
        Ok(elem)
    }

    /// Unlinks the first node, counting from the head, whose value is `elem`.
    ///
    /// Returns `None` when the value is absent (an empty ring included); the
    /// ring is not modified in that case.
    pub fn delete_by_value(&mut self, elem: i64) -> Option<Removal> {
        let Some(tail) = self.tail else {
            debug!(value = elem, "delete by value on an empty ring");
            return None;
        };
        let head = self.node(tail).next;

        // do-while：先看值，再前进，再判断是否绕回了头
        // 单节点的环也会被检查一次
        let mut prev = tail;
        let mut cur = head;
        let mut found = None;
        let mut steps = 0;
        loop {
            if self.node(cur).elem == elem {
                found = Some(cur);
                break;
            }
            prev = cur;
            cur = self.node(cur).next;
            steps += 1;
            if cur == head || steps == self.len {
                break;
            }
        }

        let Some(target) = found else {
            debug!(value = elem, len = self.len, "value not found");
            return None;
        };

        let next = self.node(target).next;
        let removal = if self.len == 1 {
            self.tail = None;
            Removal::Only
        } else if target == head {
            self.node_mut(tail).next = next;
            Removal::Head
        } else if target == tail {
            // 尾的下一个就是头
            self.node_mut(prev).next = next;
            self.tail = Some(prev);
            Removal::Tail
        } else {
            self.node_mut(prev).next = next;
            Removal::Interior
        };
        self.len -= 1;
        self.release(target);

        trace!(value = elem, len = self.len, ?removal, "deleted by value");
        Some(removal)
    }

    pub fn search(&self, elem: i64) -> bool {
        self.iter().any(|e| e == elem)
    }

    pub fn head(&self) -> Option<i64> {
        self.tail.map(|tail| self.node(self.node(tail).next).elem)
    }

    pub fn tail(&self) -> Option<i64> {
        self.tail.map(|tail| self.node(tail).elem)
    }

    pub fn clear(&mut self) {
        while let Ok(_) = self.delete_at_head() {}
        // 空环不需要留着槽位
        self.slots.clear();
        self.free.clear();
    }

    /// A view of the values from head to tail, exactly `len()` of them.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.tail.map(|tail| self.node(tail).next),
            len: self.len,
        }
    }
}

// Iter ===========================================
impl<'a> IntoIterator for &'a CircularList {
    type IntoIter = Iter<'a>;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.next.map(|idx| {
            let node = self.list.node(idx);
            self.len -= 1;
            self.next = Some(node.next);
            node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.len
    }
}

// 其他常用trait ===================================
impl Default for CircularList {
    fn default() -> Self {
        Self::new()
    }
}

// 重新按顺序尾插，顺便把空槽压实
impl Clone for CircularList {
    fn clone(&self) -> Self {
        let mut new_list = Self::new();
        for elem in self {
            new_list.insert_at_tail(elem);
        }
        new_list
    }
}

impl Debug for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

// 比的是从头开始的内容，和槽位怎么排的无关
impl PartialEq for CircularList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl Eq for CircularList {}

impl Display for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(head), Some(tail)) = (self.head(), self.tail()) else {
            return write!(f, "List is empty.");
        };
        write!(f, "List (tail -> {}): head -> ", tail)?;
        for elem in self {
            write!(f, "{} -> ", elem)?;
        }
        write!(f, "(head again: {})", head)
    }
}

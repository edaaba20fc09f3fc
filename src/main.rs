use single_linked_list::collections::linked::SingleLinkedList;

fn main() {
    println!("\n[SingleLinkedList]\n");

    let mut list = SingleLinkedList::<u8>::new();
    println!("{:?}", list);

    for i in 0..8 {
        list.add(i);
        println!("{}", list);
    }

    list.insert(2, 100);
    list.force_insert(50, 200);
    println!("{:?}", list);

    println!("{:?}, {}", list.remove(3), list);
    println!("{:?}", list.try_get(20));
    println!("search 100: {:?}", list.search(&100));
    println!("head: {:?}, tail: {:?}", list.head(), list.tail());

    let words: SingleLinkedList<&str> = ["a", "b", "c"].into_iter().collect();
    println!("{}", words);
}

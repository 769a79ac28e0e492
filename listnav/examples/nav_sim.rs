// Example: drive keyboard navigation over a simulated transaction list.
use listnav::{
    FocusTree, Key, KeyEvent, ListController, NavOptions, NodeKind,
};
use listwindow::WindowOptions;

/// A tiny arena tree standing in for the real UI surface.
struct SimTree {
    labels: Vec<&'static str>,
    focused: Option<usize>,
}

// Node ids: 0 is the root; row i is 1 + 2*i, its button is 2 + 2*i.
impl SimTree {
    fn row(i: usize) -> usize {
        1 + 2 * i
    }

    fn is_row(id: usize) -> bool {
        id != 0 && id % 2 == 1
    }
}

impl FocusTree for SimTree {
    type Id = usize;

    fn child_count(&self, id: usize) -> usize {
        if id == 0 {
            self.labels.len()
        } else if Self::is_row(id) {
            1
        } else {
            0
        }
    }

    fn child(&self, id: usize, n: usize) -> usize {
        if id == 0 { Self::row(n) } else { id + 1 }
    }

    fn kind(&self, id: usize) -> NodeKind {
        if id == 0 || Self::is_row(id) {
            NodeKind::Other
        } else {
            NodeKind::Button
        }
    }

    fn tab_priority(&self, _id: usize) -> Option<i16> {
        None
    }

    fn matches(&self, id: usize, selector: &str) -> bool {
        selector == "row" && Self::is_row(id)
    }

    fn append_text(&self, id: usize, out: &mut String) {
        if id != 0 {
            out.push_str(self.labels[(id - 1) / 2]);
        }
    }

    fn focus(&mut self, id: usize) {
        self.focused = Some(id);
    }

    fn focused(&self) -> Option<usize> {
        self.focused
    }
}

fn main() {
    let mut tree = SimTree {
        labels: vec!["Coffee", "Rent", "Salary", "Groceries", "Gym"],
        focused: None,
    };

    let mut ctrl: ListController<SimTree> = ListController::new(
        NavOptions::new("row")
            .with_focus_on_mount(true)
            .with_on_select(Some(|target: usize, index: usize| {
                println!("selected target={target} index={index}");
            })),
        WindowOptions::new(0, 48, 96).with_overscan(1),
    );
    ctrl.mount(&mut tree, 0);
    println!("mounted: cursor={:?}", ctrl.navigator().current_index());

    // Walk down twice, then activate.
    for key in [Key::ArrowDown, Key::ArrowDown, Key::Enter] {
        let mut ev = KeyEvent::new(key);
        let scrolled = ctrl.handle_key(&mut tree, &mut ev, 0);
        println!(
            "{key:?}: cursor={:?} focused={:?} scroll={scrolled:?} window={:?}",
            ctrl.navigator().current_index(),
            tree.focused,
            ctrl.window(),
        );
    }

    // Typeahead: jump to the first row starting with "g".
    let mut ev = KeyEvent::new(Key::Char('g'));
    ctrl.handle_key(&mut tree, &mut ev, 100);
    println!(
        "typeahead 'g': cursor={:?} buffer={:?}",
        ctrl.navigator().current_index(),
        ctrl.navigator().typeahead_buffer(),
    );

    ctrl.tick(2000);
    println!("after idle: buffer={:?}", ctrl.navigator().typeahead_buffer());
}
